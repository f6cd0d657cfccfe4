use super::frame::EmbeddedPlayer;
use super::messages::Message;
use super::state::{
    App, CARD_SPACING_PX, FEATURE_MEDIA_HEIGHT_PX, NAV_SPACING_PX, SCALE_INSET_PX,
    SHORT_MEDIA_HEIGHT_PX, SHORT_TEXT_MAX_CHARS,
};
use crate::theme::{accent, difficulty_color, muted};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Image;
use iced::widget::{
    Column, Row, button, column, container, horizontal_space, row, stack, text, tooltip,
};
use iced::{Border, Color, ContentFit, Element, Length, Padding, Theme};
use showcase_core::{CardLayout, Difficulty, Item, Transition};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let carousel = &self.section.carousel;
        let kind = self.section.kind;

        let header = row![
            text(kind.to_string()).size(28),
            horizontal_space(),
            button(text(format!("Show {}", kind.other())))
                .on_press(Message::ShowSection(kind.other()))
                .style(button::secondary),
        ]
        .spacing(12)
        .align_y(Vertical::Center);

        let body: Element<'_, Message> = if carousel.pager().is_empty() {
            container(text("Nothing to show yet.").color(muted()))
                .center(Length::Fill)
                .into()
        } else if carousel.show_navigation() {
            stack![self.page_view(), self.navigation_overlay()].into()
        } else {
            self.page_view()
        };

        let mut content = column![header, body].spacing(CARD_SPACING_PX).padding(24);
        if let Some(copyright) = &self.catalog.copyright {
            content = content.push(
                container(text(copyright).size(12).color(muted())).center_x(Length::Fill),
            );
        }
        content.into()
    }

    fn page_view(&self) -> Element<'_, Message> {
        let carousel = &self.section.carousel;
        let Some(page) = carousel.pager().current() else {
            return horizontal_space().into();
        };
        let transition = self.section.active_transition();
        let compact = self.viewport.is_compact();

        let cards: Element<'_, Message> = match carousel.layout() {
            CardLayout::Feature => Column::with_children(
                page.iter()
                    .map(|item| self.feature_card(item, compact, transition.interactive)),
            )
            .spacing(CARD_SPACING_PX)
            .into(),
            CardLayout::ShortForm => Row::with_children(
                page.iter()
                    .map(|item| self.short_form_card(item, transition.interactive)),
            )
            .spacing(CARD_SPACING_PX)
            .into(),
        };

        let opacity = transition.opacity;
        container(cards)
            .padding(transition_padding(transition))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |theme: &Theme| container::Style {
                text_color: Some(fade(theme.palette().text, opacity)),
                ..container::Style::default()
            })
            .into()
    }

    fn feature_card<'a>(
        &'a self,
        item: &'a Item,
        compact: bool,
        interactive: bool,
    ) -> Element<'a, Message> {
        let media = self.media(item, CardLayout::Feature, interactive, FEATURE_MEDIA_HEIGHT_PX);

        let mut details = column![text(&item.title).size(26)].spacing(8);
        if let Some(subtitle) = &item.subtitle {
            details = details.push(text(subtitle).size(16).color(muted()));
        }
        if let Some(level) = item.difficulty {
            details = details.push(difficulty_badge(level));
        }
        details = details.push(text(&item.text).size(16));

        if compact {
            column![media, details].spacing(CARD_SPACING_PX).into()
        } else {
            row![
                container(media).width(Length::FillPortion(3)),
                container(details).width(Length::FillPortion(2)),
            ]
            .spacing(CARD_SPACING_PX * 2.0)
            .into()
        }
    }

    fn short_form_card<'a>(&'a self, item: &'a Item, interactive: bool) -> Element<'a, Message> {
        let media = self.media(item, CardLayout::ShortForm, interactive, SHORT_MEDIA_HEIGHT_PX);

        let mut card = column![media, text(&item.title).size(20)]
            .spacing(8)
            .width(Length::FillPortion(1));
        if let Some(subtitle) = &item.subtitle {
            card = card.push(text(subtitle).size(14).color(muted()));
        }
        if let Some(level) = item.difficulty {
            card = card.push(difficulty_badge(level));
        }
        if !item.text.is_empty() {
            card = card.push(text(clamp_text(&item.text, SHORT_TEXT_MAX_CHARS)).size(14));
        }
        card.into()
    }

    /// Still cover with a play affordance, or the player panel once the item
    /// is the one playing.
    fn media<'a>(
        &'a self,
        item: &'a Item,
        layout: CardLayout,
        interactive: bool,
        height: f32,
    ) -> Element<'a, Message> {
        let carousel = &self.section.carousel;
        let embed = self.section.embeds.get(&item.id);

        let inner: Element<'a, Message> = if carousel.cover_visible(&item.id) {
            let url = self.catalog.cover_url(&item.id, layout);
            let still: Element<'a, Message> = match self.covers.handle(url) {
                Some(handle) => Image::new(handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Cover)
                    .into(),
                None => {
                    let label = if self.covers.is_loading(url) {
                        "Loading cover..."
                    } else {
                        item.title.as_str()
                    };
                    container(text(label).color(muted())).center(Length::Fill).into()
                }
            };
            let play = button(text("▶ Play").size(18))
                .padding([10, 18])
                .style(button::primary)
                .on_press_maybe(interactive.then(|| Message::PlayItem(item.id.clone())));
            stack![still, container(play).center(Length::Fill)].into()
        } else {
            let status = embed
                .map(|embed| embed.status().label())
                .unwrap_or("Connecting");
            let src = embed.map(EmbeddedPlayer::src).unwrap_or(item.url.as_str());
            let pause = button(text("Pause"))
                .style(button::secondary)
                .on_press_maybe(interactive.then_some(Message::PausePlayback));
            container(
                column![
                    text(format!("▶ {status}")).size(22).color(Color::WHITE),
                    text(src).size(12).color(muted()),
                    pause,
                ]
                .spacing(10)
                .align_x(Horizontal::Center),
            )
            .center(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Color::BLACK.into()),
                ..container::Style::default()
            })
            .into()
        };

        let border_color = accent(layout);
        container(inner)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .clip(true)
            .style(move |_theme: &Theme| container::Style {
                border: Border {
                    color: border_color,
                    width: 2.0,
                    radius: 12.0.into(),
                },
                ..container::Style::default()
            })
            .into()
    }

    /// Prev/next plus one indicator per page. Laid out along the axis the
    /// pages slide on: a bottom row when compact, a right column when wide.
    fn navigation_overlay(&self) -> Element<'_, Message> {
        let carousel = &self.section.carousel;
        let unit = carousel.layout().unit_label();
        let compact = self.viewport.is_compact();
        let current = carousel.current_page();

        let (prev_icon, next_icon) = if compact { ("‹", "›") } else { ("▲", "▼") };
        let tip_position = if compact {
            tooltip::Position::Top
        } else {
            tooltip::Position::Left
        };
        let with_tip = |control: Element<'static, Message>,
                        label: String|
         -> Element<'static, Message> {
            tooltip(
                control,
                container(text(label).size(12))
                    .padding(6)
                    .style(container::rounded_box),
                tip_position,
            )
            .into()
        };

        let prev = button(text(prev_icon).size(20))
            .style(button::secondary)
            .on_press_maybe(carousel.has_prev().then_some(Message::PreviousPage));
        let next = button(text(next_icon).size(20))
            .style(button::secondary)
            .on_press_maybe(carousel.has_next().then_some(Message::NextPage));

        let mut controls: Vec<Element<'static, Message>> =
            vec![with_tip(prev.into(), format!("Previous {unit}"))];
        for index in 0..carousel.page_count() {
            let dot = button(text(if index == current { "●" } else { "○" }).size(14))
                .style(button::text)
                .on_press_maybe((index != current).then_some(Message::GoToPage(index)));
            controls.push(with_tip(
                dot.into(),
                format!("Go to {} {}", unit.to_lowercase(), index + 1),
            ));
        }
        controls.push(with_tip(next.into(), format!("Next {unit}")));

        if compact {
            container(
                Row::with_children(controls)
                    .spacing(NAV_SPACING_PX)
                    .align_y(Vertical::Center),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .into()
        } else {
            container(
                Column::with_children(controls)
                    .spacing(NAV_SPACING_PX)
                    .align_x(Horizontal::Center),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Center)
            .into()
        }
    }
}

fn difficulty_badge(level: Difficulty) -> Element<'static, Message> {
    let color = difficulty_color(level);
    container(text(level.to_string()).size(12).color(Color::WHITE))
        .padding([2, 8])
        .style(move |_theme: &Theme| container::Style {
            background: Some(color.into()),
            border: Border {
                radius: 8.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

/// Map a page transition onto padding: offsets push the page off-centre,
/// lost scale insets it evenly.
fn transition_padding(transition: Transition) -> Padding {
    let inset = (1.0 - transition.scale).max(0.0) * SCALE_INSET_PX / 2.0;
    Padding {
        top: inset + transition.offset_y.max(0.0),
        bottom: inset + (-transition.offset_y).max(0.0),
        left: inset + transition.offset_x.max(0.0),
        right: inset + (-transition.offset_x).max(0.0),
    }
}

/// Cut `text` to at most `max_chars` characters, ending on a word boundary
/// with an ellipsis when something was dropped.
fn clamp_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    let trimmed = match cut.rfind(char::is_whitespace) {
        Some(boundary) if boundary > 0 => &cut[..boundary],
        _ => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end())
}

fn fade(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_page_has_no_padding() {
        let resting = Transition {
            opacity: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
            interactive: true,
        };
        assert_eq!(transition_padding(resting), Padding::ZERO);
    }

    #[test]
    fn offsets_land_on_matching_side() {
        let entering = Transition {
            opacity: 0.0,
            offset_x: -64.0,
            offset_y: 0.0,
            scale: 0.95,
            interactive: false,
        };
        let padding = transition_padding(entering);
        assert!(padding.right > padding.left);
        assert!((padding.left - 6.0).abs() < 1e-3);
        assert!((padding.top - padding.bottom).abs() < 1e-3);
    }

    #[test]
    fn short_text_is_clamped_on_word_boundary() {
        assert_eq!(clamp_text("short", 10), "short");
        assert_eq!(clamp_text("alpha beta gamma", 12), "alpha beta…");
        assert_eq!(clamp_text("unbroken", 4), "unbr…");
    }

    #[test]
    fn fade_scales_alpha() {
        assert_eq!(fade(Color::WHITE, 0.5).a, 0.5);
        assert_eq!(fade(Color::WHITE, 4.0).a, 1.0);
    }
}
