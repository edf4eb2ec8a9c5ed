/// Widget layer: turns a `Page` description into iced widgets.
///
/// Everything here is presentation only. Which panels exist, what they
/// contain and which tab is active were all decided by `ui::page`; this
/// module just lays the result out and wires up click messages. The
/// page is consumed: its strings move straight into the widgets.

use std::collections::HashMap;

use iced::widget::{button, column, container, image, row, scrollable, text, Column, Row};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::page::{GalleryItem, InfoList, Page, Panel, PanelBody, Tab};
use crate::Message;

/// Display width of one gallery image
const PHOTO_WIDTH: f32 = 260.0;

/// Build the whole dashboard from a page description.
///
/// Only the panel belonging to the active tab is laid out; the others
/// exist in the page description and appear as soon as their tab is
/// clicked.
pub fn dashboard(
    page: Page,
    photos: &HashMap<String, image::Handle>,
    status: String,
) -> Element<'static, Message> {
    let active_key = page.tabs.iter().find(|tab| tab.active).map(|tab| tab.key.clone());
    let active_panel = page
        .panels
        .into_iter()
        .find(|panel| Some(&panel.key) == active_key.as_ref());

    let mut content: Column<Message> = column![
        text(page.title).size(32),
        text(page.intro).size(16),
        tab_bar(page.tabs),
    ]
    .spacing(16)
    .padding(24)
    .align_x(Alignment::Center);

    if let Some(panel) = active_panel {
        content = content.push(panel_view(panel, photos));
    }

    content = content.push(text(status).size(14));

    container(scrollable(content.width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// One button per rover, the active one highlighted
fn tab_bar(tabs: Vec<Tab>) -> Element<'static, Message> {
    let mut bar: Row<Message> = row![].spacing(8);

    for tab in tabs {
        let style = if tab.active {
            button::primary
        } else {
            button::secondary
        };
        bar = bar.push(
            button(text(tab.label).size(18))
                .on_press(Message::TabSelected(tab.key))
                .style(style)
                .padding(10),
        );
    }

    bar.into()
}

/// A rover panel: heading plus either its data or the placeholder
fn panel_view(
    panel: Panel,
    photos: &HashMap<String, image::Handle>,
) -> Element<'static, Message> {
    let body: Element<Message> = match panel.body {
        PanelBody::Loading => loading_placeholder(),
        PanelBody::Loaded { info, gallery } => column![
            info_list(info),
            gallery_grid(gallery, photos),
        ]
        .spacing(20)
        .into(),
    };

    column![text(panel.heading).size(24), body]
        .spacing(16)
        .align_x(Alignment::Center)
        .into()
}

/// Shown while a rover's fetch is still in flight (or has failed)
fn loading_placeholder() -> Element<'static, Message> {
    column![
        text("Loading...").size(28),
        text("Waiting for the latest photos from Mars.").size(14),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .into()
}

/// The mission facts drawn from the most recent photo
fn info_list(info: InfoList) -> Element<'static, Message> {
    column![
        info_row("Launch Date", info.launch_date),
        info_row("Landing Date", info.landing_date),
        info_row("Status", info.status),
        info_row("Most recent photos taken", info.latest_photo_date),
    ]
    .spacing(4)
    .into()
}

fn info_row(label: &'static str, value: String) -> Element<'static, Message> {
    row![
        text(label).size(16).width(Length::Fixed(220.0)),
        text(value).size(16),
    ]
    .spacing(12)
    .into()
}

/// All photos in record order, wrapped into a grid.
///
/// Image bytes arrive independently of the metadata; a photo whose
/// bytes have not landed yet shows a small placeholder with its date.
fn gallery_grid(
    gallery: Vec<GalleryItem>,
    photos: &HashMap<String, image::Handle>,
) -> Element<'static, Message> {
    let cells: Vec<Element<'static, Message>> = gallery
        .into_iter()
        .map(|item| {
            let handle = photos.get(&item.image_url).cloned();
            gallery_cell(item, handle)
        })
        .collect();

    Wrap::with_elements(cells)
        .spacing(12.0)
        .line_spacing(12.0)
        .into()
}

fn gallery_cell(item: GalleryItem, handle: Option<image::Handle>) -> Element<'static, Message> {
    let picture: Element<Message> = match handle {
        Some(handle) => image(handle).width(Length::Fixed(PHOTO_WIDTH)).into(),
        None => container(text("Fetching image...").size(14))
            .width(Length::Fixed(PHOTO_WIDTH))
            .padding(40)
            .into(),
    };

    column![picture, text(item.earth_date).size(13)]
        .spacing(4)
        .align_x(Alignment::Center)
        .into()
}
