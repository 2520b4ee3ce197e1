//! Dashboard charts rendered as plain HTML bars and inline SVG pies.

use cardgallery_core::chart::{bar_fractions, pie_slices};
use cardgallery_core::TagCount;
use dioxus::prelude::*;

use crate::theme::colors::{BAR_FILL, NO_DATA, SLICE_STROKE};

const PIE_SIZE: f64 = 200.0;
const PIE_RADIUS: f64 = 80.0;
/// Slice counts sit at this fraction of the radius
const LABEL_RADIUS: f64 = 0.65;

/// Horizontal bar per tag, scaled against the most used one
#[component]
pub fn BarChart(counts: Vec<TagCount>) -> Element {
    let bars = bar_fractions(&counts);

    rsx! {
        div { class: "bar-chart",
            for bar in bars {
                {
                    let width = format!("{:.1}", bar.width_percent());
                    rsx! {
                        div { key: "{bar.label}", class: "bar-chart__row",
                            span { class: "bar-chart__label", "{bar.label}" }
                            div { class: "bar-chart__track",
                                div {
                                    class: "bar-chart__bar",
                                    style: "width: {width}%; background: {BAR_FILL};",
                                }
                            }
                            span { class: "bar-chart__count", "{bar.count}" }
                        }
                    }
                }
            }
        }
    }
}

/// Pie of one category's tag usage. Categories without data get a grey
/// placeholder disc.
#[component]
pub fn PieChart(name: String, color: String, counts: Vec<TagCount>) -> Element {
    let slices = pie_slices(&counts);
    let c = PIE_SIZE / 2.0;

    rsx! {
        div { class: "pie-card",
            h3 { class: "pie-card__title", style: "color: {color};", "{name}" }
            svg {
                class: "pie-chart",
                width: "{PIE_SIZE}",
                height: "{PIE_SIZE}",
                view_box: "0 0 {PIE_SIZE} {PIE_SIZE}",
                if slices.is_empty() {
                    circle { cx: "{c}", cy: "{c}", r: "{PIE_RADIUS}", fill: NO_DATA }
                    text {
                        x: "{c}",
                        y: "{c}",
                        text_anchor: "middle",
                        dominant_baseline: "middle",
                        class: "pie-chart__placeholder",
                        "No data"
                    }
                }
                for slice in slices.iter() {
                    path {
                        key: "{slice.label}",
                        d: slice.svg_path(c, c, PIE_RADIUS),
                        fill: slice.color,
                        stroke: SLICE_STROKE,
                        stroke_width: "1",
                    }
                }
                for slice in slices.iter() {
                    {
                        let (lx, ly) = slice.label_anchor(c, c, PIE_RADIUS * LABEL_RADIUS);
                        let lx = format!("{lx:.1}");
                        let ly = format!("{ly:.1}");
                        rsx! {
                            text {
                                key: "label-{slice.label}",
                                x: "{lx}",
                                y: "{ly}",
                                text_anchor: "middle",
                                dominant_baseline: "middle",
                                class: "pie-chart__label",
                                "{slice.value}"
                            }
                        }
                    }
                }
            }
            if !slices.is_empty() {
                ul { class: "pie-legend",
                    for slice in slices.iter() {
                        li { key: "{slice.label}",
                            span { class: "pie-legend__swatch", style: "background: {slice.color};" }
                            "{slice.label} ({slice.value})"
                        }
                    }
                }
            }
        }
    }
}
