use std::fmt::Display;

use dioxus::logger::tracing;
use dioxus::prelude::*;

use common::search_result::HeroMetrics;

use crate::api::search_api::get_hero_metrics;

/// The hero counters are decoration: a failed request shows zeros instead of an error.
pub fn metrics_or_zero<E: Display>(result: Result<HeroMetrics, E>) -> HeroMetrics {
    result.unwrap_or_else(|e| {
        tracing::warn!("failed to load hero metrics: {e}");
        HeroMetrics::default()
    })
}

#[component]
pub fn LandingHero() -> Element {
    let metrics = use_resource(|| async { metrics_or_zero(get_hero_metrics().await) });
    let metrics = (*metrics.read()).unwrap_or_default();

    rsx! {
        section {
            id: "x-landing-hero",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                width: 100%;
                padding: 40px 16px 24px 16px;
                align-items: center;
                background: linear-gradient(180deg, #EFF6FF 0%, #F8FAFC 100%);
            ",
            h1 {
                style: "margin: 0; font-size: 34px; font-weight: 700; color: #0F172A; text-align: center;",
                "Temukan magang yang sesuai untukmu"
            }
            p {
                style: "margin: 0; font-size: 16px; color: #475569; text-align: center;",
                "Telusuri lowongan magang dari seluruh Indonesia."
            }
            div {
                style: "display: flex; gap: 24px; margin-top: 8px;",
                HeroCounter { value: metrics.total, label: "Lowongan aktif" }
                HeroCounter { value: metrics.new_count, label: "Lowongan baru" }
            }
        }
    }
}

#[component]
fn HeroCounter(value: i64, label: &'static str) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; padding: 10px 20px; border-radius: 12px; background: white; border: 1px solid #DBEAFE;",
            span { style: "font-size: 24px; font-weight: 700; color: #1D4ED8;", "{value}" }
            span { style: "font-size: 13px; color: #64748B;", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_metrics_read_as_zero() {
        assert_eq!(metrics_or_zero(Err::<HeroMetrics, _>("connection refused")), HeroMetrics { total: 0, new_count: 0 });
    }

    #[test]
    fn loaded_metrics_pass_through() {
        let metrics = HeroMetrics { total: 1200, new_count: 35 };
        assert_eq!(metrics_or_zero::<String>(Ok(metrics)), metrics);
    }
}
