//! Scripted walkthrough: radio and checked-text groups, a picker dialog and a tint.

use std::path::PathBuf;
use std::process::ExitCode;

use customview::color::{Color, PickerDialog, PointerEvent, Tint};
use customview::select::{
    CheckMarkPosition, CheckedText, Handle, Node, RadioButton, RelativeRadioGroup, Selectable,
    TableChild, TableRadioGroup,
};
use customview::{CustomViewConfig, PickerConfig};

fn main() -> ExitCode {
    let path = std::env::args().nth(1).map(PathBuf::from);
    let config = match CustomViewConfig::load_or_default(path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = customview::init_logging(config.log_level) {
        eprintln!("Logger setup failed: {}", e);
    }

    run_radio_group();
    run_checked_list();
    run_picker(&config.picker);
    run_tint();
    ExitCode::SUCCESS
}

fn run_radio_group() {
    let mut group: TableRadioGroup = TableRadioGroup::new().with_name("sizes");
    group.on_checked_change(|change| {
        log::info!("{}: checked {:?}", change.group, change.checked);
    });

    group.add_child(TableChild::Row(vec![
        Node::Other("Size".into()),
        Node::Item(RadioButton::new("small").with_handle(1)),
        Node::Item(RadioButton::new("medium").with_handle(2).checked(true)),
    ]));
    group.add_child(TableChild::row_of([RadioButton::new("large").with_handle(3)]));

    group.toggle(Handle(3));
    group.check(Some(Handle(1)));

    let label = group
        .checked()
        .and_then(|handle| group.item(handle))
        .map_or("none", RadioButton::label);
    println!("radio group: checked {}", label);
}

fn run_checked_list() {
    let mut list: RelativeRadioGroup<CheckedText> = RelativeRadioGroup::new().with_name("wifi");
    for name in ["home", "office", "cafe"] {
        list.add_child(Node::Item(
            CheckedText::new(name)
                .with_position(CheckMarkPosition::Right)
                .with_check_mark(24, 24),
        ));
    }

    let office = list.items().nth(1).and_then(Selectable::handle);
    if let Some(handle) = office {
        list.toggle(handle);
        list.toggle(handle);
    }
    let on = list.items().filter(|item| item.is_checked()).count();
    println!("checked list: {} item(s) on, recorded {:?}", on, list.checked());
}

fn run_picker(config: &PickerConfig) {
    let geometry = config.geometry;
    let mut dialog = PickerDialog::new(geometry, config.initial_color);

    let c = geometry.center;
    let ring = c + (c - geometry.ring_thickness / 2.0);
    let square = c + geometry.square_half() / 2.0;
    let confirm_y = c + (geometry.confirm_top + geometry.confirm_bottom) / 2.0;

    let script = [
        PointerEvent::down(ring, c),
        PointerEvent::moved(square, square),
        PointerEvent::up(square, square),
        PointerEvent::down(c, confirm_y),
        PointerEvent::up(c, confirm_y),
    ];

    for event in script {
        let response = dialog.handle(event);
        if let Some(color) = response.confirmed {
            println!("picker: confirmed {} (hue {:.1})", color, dialog.session().hue());
        }
    }
    println!("picker: dialog open after confirm: {}", dialog.is_open());
}

fn run_tint() {
    let tint = Tint::from_attributes(Color::from_packed(0x8000_80FF), Some("MULTIPLY"));
    match tint {
        Some(tint) => println!("tint: {} with {}", tint.color, tint.mode),
        None => println!("tint: none"),
    }
}
