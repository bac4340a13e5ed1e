// SPDX-License-Identifier: MPL-2.0
//! Screen layout for the demo application.
//!
//! Each screen is a column of controls with the event log underneath. The
//! screen's bubble is layered on top with a [`Stack`], 100 px below the top
//! edge and centered horizontally, as long as it is attached to the stage.

use super::markup::MarkupDocument;
use super::stage::Stage;
use super::{Message, Screen};
use crate::config::DEMO_BUBBLE_TOP_OFFSET;
use crate::ui::bubble::{self, InfoBubble};
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{Element, Length, Padding};

/// Everything the view needs from the application state.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub warning: Option<&'a str>,
    pub programmatic: &'a InfoBubble,
    pub markup_bubble: &'a InfoBubble,
    pub markup: &'a MarkupDocument,
    pub stage: &'a Stage,
    pub events: Vec<String>,
}

impl<'a> ViewContext<'a> {
    /// The bubble belonging to the current screen.
    fn active_bubble(&self) -> &'a InfoBubble {
        match self.screen {
            Screen::Programmatic => self.programmatic,
            Screen::Markup => self.markup_bubble,
        }
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body = match ctx.screen {
        Screen::Programmatic => programmatic_screen(),
        Screen::Markup => markup_screen(ctx.markup),
    };

    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(navigation(ctx.screen));

    if let Some(warning) = ctx.warning {
        content = content.push(
            Text::new(warning.to_string())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    content = content.push(body).push(event_log(&ctx.events));

    let mut stack = Stack::new().push(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let bubble = ctx.active_bubble();
    if ctx.stage.contains(bubble.id()) && !bubble.is_hidden() {
        stack = stack.push(bubble_overlay(bubble));
    }

    stack.into()
}

fn navigation<'a>(current: Screen) -> Element<'a, Message> {
    Screen::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, screen| {
            let label = button(Text::new(screen.title()).size(typography::BODY));
            let label = if screen == current {
                label
            } else {
                label.on_press(Message::SwitchScreen(screen))
            };
            row.push(label)
        })
        .into()
}

fn programmatic_screen<'a>() -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(Screen::Programmatic.title()).size(typography::TITLE_MD))
        .push(
            Text::new("The bubble removes itself from the stage after it hides.")
                .size(typography::BODY),
        )
        .push(button(Text::new("Show bubble")).on_press(Message::ShowProgrammatic))
        .into()
}

fn markup_screen(document: &MarkupDocument) -> Element<'_, Message> {
    document.actions().iter().enumerate().fold(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(Screen::Markup.title()).size(typography::TITLE_MD)),
        |column, (index, action)| {
            column.push(
                button(Text::new(action.name.as_str())).on_press(Message::RunAction(index)),
            )
        },
    )
    .into()
}

fn event_log<'a>(events: &[String]) -> Element<'a, Message> {
    let header = Text::new("Events").size(typography::BODY);
    let column = Column::new().spacing(spacing::XXS).push(header);

    if events.is_empty() {
        return column
            .push(
                Text::new("No events yet")
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .into();
    }

    events
        .iter()
        .fold(column, |column, line| {
            column.push(Text::new(line.clone()).size(typography::CAPTION))
        })
        .into()
}

fn bubble_overlay(bubble: &InfoBubble) -> Element<'_, Message> {
    Container::new(bubble::view::view(bubble))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: DEMO_BUBBLE_TOP_OFFSET,
            ..Padding::ZERO
        })
        .align_x(Horizontal::Center)
        .into()
}
