//! Documentation page body and its table of contents

use std::time::Instant;

use eframe::egui;

use crate::constants::nav::SCROLL_SPY_MARGIN;
use crate::content::{Block, Page};
use crate::gui::constants::*;
use crate::nav::{CopyFeedback, TocState};

/// Renders a page inside its own scroll area and updates the scroll-spy
pub fn ui(ui: &mut egui::Ui, page: &Page, toc: &mut TocState, copy: &mut CopyFeedback) {
    let jump = toc.take_jump();
    let now = Instant::now();

    let output = egui::ScrollArea::vertical()
        .id_salt(page.route)
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.heading(egui::RichText::new(page.title).size(26.0));
            ui.label(egui::RichText::new(page.summary).weak());
            ui.add_space(SECTION_SPACING);

            let mut headings = Vec::with_capacity(page.sections.len());
            let mut block_index = 0;
            for section in page.sections {
                let heading = ui.heading(section.heading);
                if jump == Some(section.anchor) {
                    heading.scroll_to_me(Some(egui::Align::TOP));
                }
                headings.push((section.anchor, heading.rect.top()));
                ui.add_space(ITEM_SPACING);

                for block in section.blocks {
                    block_ui(ui, block, block_index, copy, now);
                    block_index += 1;
                    ui.add_space(ITEM_SPACING);
                }
                ui.add_space(SECTION_SPACING);
            }
            headings
        });

    toc.observe(&output.inner, output.inner_rect.top(), SCROLL_SPY_MARGIN);

    if let Some(remaining) = copy.remaining(now) {
        ui.ctx().request_repaint_after(remaining);
    }
}

fn block_ui(ui: &mut egui::Ui, block: &Block, index: usize, copy: &mut CopyFeedback, now: Instant) {
    match block {
        Block::Paragraph(text) => {
            ui.label(*text);
        }
        Block::Bullets(items) => {
            for item in *items {
                ui.label(format!("\u{2022} {item}"));
            }
        }
        Block::Code { language, source } => {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(*language).small().weak());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if copy.is_active(index, now) {
                            ui.colored_label(STATUS_OK, "\u{2714} Copied");
                        } else if ui.small_button("Copy").clicked() {
                            ui.ctx().copy_text(source.to_string());
                            copy.record(index, now);
                        }
                    });
                });
                ui.label(egui::RichText::new(*source).monospace());
            });
        }
    }
}

/// Table of contents for the right panel; clicking schedules a jump
pub fn toc_ui(ui: &mut egui::Ui, page: &Page, toc: &mut TocState) {
    ui.label(egui::RichText::new("On this page").strong());
    ui.add_space(ITEM_SPACING);
    for section in page.sections {
        let active = toc.active() == Some(section.anchor);
        let text = if active {
            egui::RichText::new(section.heading).color(ACCENT)
        } else {
            egui::RichText::new(section.heading)
        };
        if ui.selectable_label(active, text).clicked() {
            toc.request_jump(section.anchor);
        }
    }
}
