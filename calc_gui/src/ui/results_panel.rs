//! Results Panel (Right)
//!
//! Shows the held estimate: cubic yards large, cubic feet beneath it, then
//! one row per bag size. Without an estimate it shows the prompt instead.

use iced::widget::{column, container, row, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length};

use calc_core::calculations::ConcreteResult;
use calc_core::display::{ResultsView, MATERIALS_HEADING, PLACEHOLDER, RESULTS_HEADING};

use crate::Message;

const ACCENT: [f32; 3] = [0.2, 0.75, 0.55];

/// Render the results panel for an optional result
pub fn view_results_panel(result: Option<&ConcreteResult>) -> Element<'static, Message> {
    let body: Column<'static, Message> = match ResultsView::from_result(result) {
        ResultsView::Placeholder => column![
            Space::new().height(40),
            text(PLACEHOLDER).size(14).color([0.5, 0.5, 0.5]),
        ]
        .align_x(Alignment::Center)
        .width(Length::Fill),
        ResultsView::Estimate {
            volume_yards,
            volume_feet,
            bags,
        } => {
            let volume = container(column![
                text("Volume").size(11).color(ACCENT),
                text(volume_yards).size(30),
                text(volume_feet).size(13).color([0.6, 0.6, 0.6]),
            ])
            .padding(10)
            .width(Length::Fill)
            .style(container::bordered_box);

            let mut materials = column![text(MATERIALS_HEADING).size(14)].spacing(6);
            for line in bags {
                materials = materials.push(
                    container(
                        row![
                            text(line.label).size(13),
                            Space::new().width(Length::Fill),
                            text(line.count).size(18).color(ACCENT),
                        ]
                        .align_y(Alignment::Center),
                    )
                    .padding(10)
                    .width(Length::Fill)
                    .style(container::bordered_box),
                );
            }

            column![volume, Space::new().height(12), materials]
        }
    };

    let content = column![text(RESULTS_HEADING).size(18), Space::new().height(8), body];

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(50))
        .style(container::bordered_box)
        .padding(5)
        .into()
}
