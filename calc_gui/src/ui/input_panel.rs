//! Input Panel (Left)
//!
//! Three dimension inputs plus the Calculate and Clear buttons.
//! Calculate is only pressable once every field has text.

use iced::widget::{button, column, container, row, text, text_input, Column, Space};
use iced::{Element, Length, Padding};

use calc_core::calculations::DimensionField;
use calc_core::EstimateForm;

use crate::Message;

/// Render the dimensions form
pub fn view_input_panel(form: &EstimateForm) -> Element<'_, Message> {
    let mut fields: Column<'_, Message> = column![
        text("Dimensions").size(18),
        Space::new().height(8),
    ]
    .spacing(6);

    for field in DimensionField::ALL {
        fields = fields.push(labeled_input(field, form.field(field)));
    }

    let calculate_enabled = form.can_calculate();
    let buttons = row![
        button(text("Calculate").size(13))
            .on_press_maybe(calculate_enabled.then_some(Message::Calculate))
            .padding(Padding::from([8, 16]))
            .width(Length::Fill)
            .style(button::success),
        button(text("Clear").size(13))
            .on_press(Message::Clear)
            .padding(Padding::from([8, 16]))
            .style(button::secondary),
    ]
    .spacing(8);

    let panel = fields.push(Space::new().height(12)).push(buttons);

    container(panel.padding(8))
        .width(Length::FillPortion(50))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Label above a numeric text input; Enter submits Calculate
fn labeled_input(field: DimensionField, value: &str) -> Element<'_, Message> {
    column![
        text(field.display_name()).size(11).color([0.6, 0.6, 0.6]),
        text_input("0", value)
            .on_input(move |s| Message::DimensionChanged(field, s))
            .on_submit(Message::Calculate)
            .width(Length::Fill)
            .padding(8)
            .size(16),
    ]
    .spacing(4)
    .into()
}
