//! Header with the application title and the light/dark toggle.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the application header
pub fn view_header(window_title: &str, dark_mode: bool) -> Element<'static, Message> {
    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    row![
        text("ConCrete Calculator").size(28),
        Space::new().width(Length::Fill),
        text(window_title.to_string()).size(12).color([0.5, 0.5, 0.5]),
        Space::new().width(12),
        button(text(theme_label).size(11))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .align_y(Alignment::Center)
    .into()
}
