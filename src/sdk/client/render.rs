use crate::sdk::fare::{FareData, FareResult};
use std::fmt::Write;

fn icon_for_transport(transport: &str) -> &'static str {
    let lower = transport.to_lowercase();
    if lower.contains("rickshaw") || lower.contains("cng") {
        "🛺"
    } else if lower.contains("ride") || lower.contains("car") {
        "🚗"
    } else if lower.contains("bus") {
        "🚌"
    } else {
        "💰"
    }
}

fn render_card(out: &mut String, fare: &FareResult) {
    let _ = writeln!(out, "{} {}", icon_for_transport(&fare.transport), fare.transport);
    let _ = writeln!(out, "   {}", fare.fare);
    let _ = writeln!(out, "   {}", fare.notes);
    if let Some(names) = &fare.bus_names {
        if !names.is_empty() {
            let _ = writeln!(out, "   Buses: {}", names.join(", "));
        }
    }
}

/// Plain-text rendering of a result: distance header, one card per fare,
/// and a tips section only when there are tips.
pub fn render_fare_data(data: &FareData) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Estimated distance: {} km", data.distance_km);
    for fare in &data.fares {
        let _ = writeln!(out);
        render_card(&mut out, fare);
    }
    if !data.travel_tips.is_empty() {
        let _ = writeln!(out, "\nTravel tips:");
        for tip in &data.travel_tips {
            let _ = writeln!(out, " - {tip}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FareData {
        FareData {
            distance_km: 22.5,
            fares: vec![FareResult {
                transport: "Local Bus".to_string(),
                fare: "40-50 BDT".to_string(),
                notes: "Crowded at rush hour".to_string(),
                bus_names: Some(vec!["Turag".to_string(), "Raida".to_string()]),
            }],
            travel_tips: vec![
                "Avoid the evening rush".to_string(),
                "Carry small notes".to_string(),
            ],
        }
    }

    #[test]
    fn renders_distance_cards_and_tips() {
        let text = render_fare_data(&sample());
        assert!(text.contains("Estimated distance: 22.5 km"));
        assert!(text.contains("🚌 Local Bus"));
        assert!(text.contains("40-50 BDT"));
        assert!(text.contains("Buses: Turag, Raida"));
        assert_eq!(text.matches(" - ").count(), 2);
    }

    #[test]
    fn tips_section_is_skipped_when_empty() {
        let mut data = sample();
        data.travel_tips.clear();
        let text = render_fare_data(&data);
        assert!(!text.contains("Travel tips"));
    }

    #[test]
    fn empty_bus_names_do_not_render_a_bus_row() {
        let mut data = sample();
        data.fares[0].bus_names = Some(vec![]);
        assert!(!render_fare_data(&data).contains("Buses:"));
    }

    #[test]
    fn transport_icons_follow_the_mode() {
        assert_eq!(icon_for_transport("CNG"), "🛺");
        assert_eq!(icon_for_transport("Ride Sharing"), "🚗");
        assert_eq!(icon_for_transport("Water Taxi"), "💰");
    }
}
