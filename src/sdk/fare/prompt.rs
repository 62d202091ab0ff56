/// Prompt parameters. The mode list, city, currency and tip range are
/// cosmetic choices in the instruction text, so they are configurable; the
/// defaults match the Dhaka deployment.
#[derive(Debug, Clone)]
pub struct PromptConfig {
    pub city: String,
    pub currency: String,
    pub transport_modes: Vec<String>,
    pub bus_mode: String,
    pub min_tips: u32,
    pub max_tips: u32,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            city: "Dhaka, Bangladesh".to_string(),
            currency: "BDT".to_string(),
            transport_modes: vec![
                "Local Bus".to_string(),
                "Rickshaw".to_string(),
                "CNG".to_string(),
                "Ride Sharing (e.g., Uber/Pathao)".to_string(),
            ],
            bus_mode: "Local Bus".to_string(),
            min_tips: 2,
            max_tips: 4,
        }
    }
}

/// Builds the instruction prompt for one query. Deterministic: the same
/// inputs always produce the same text.
pub fn build_prompt(start: &str, end: &str, config: &PromptConfig) -> String {
    let modes = config.transport_modes.join(", ");
    format!(
        "You are an expert travel assistant specializing in {city}. You have deep \
knowledge of the city's road networks, typical traffic conditions, and current, \
realistic fare structures. Your goal is to provide the most accurate travel \
distance and fare estimations possible.\n\
\n\
Given a starting point and a destination within {city}, calculate the estimated \
travel distance, fares, and travel tips. Your response must be a single JSON \
object conforming to the provided schema.\n\
\n\
Key instructions:\n\
1. Distance: the distance in kilometers should follow the most common and \
practical road route, similar to what a GPS app would calculate for a car.\n\
2. Fares: provide estimates in {currency} for: {modes}. All estimations must \
reflect the typical, average market rate; avoid surge or peak-demand pricing \
and aggressively negotiated prices.\n\
3. Bus services: in 'bus_names', list a few common bus companies operating on \
this route, only for the '{bus_mode}' entry. Leave the array empty if no \
well-known services run the exact route.\n\
4. Practicality: in the 'notes' for each fare, say if a mode is impractical \
for the route (for example, a rickshaw over a very long distance), and mention \
when fares are typically negotiated.\n\
5. Travel tips: in 'travel_tips', give {min_tips}-{max_tips} short, actionable \
pieces of advice for this specific journey (traffic patterns, negotiation, \
alternatives).\n\
\n\
The travel locations are:\n\
- Start: \"{start}\"\n\
- End: \"{end}\"\n",
        city = config.city,
        currency = config.currency,
        modes = modes,
        bus_mode = config.bus_mode,
        min_tips = config.min_tips,
        max_tips = config.max_tips,
        start = start.trim(),
        end = end.trim(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_both_locations_and_all_modes() {
        let config = PromptConfig::default();
        let prompt = build_prompt("Uttara", "Motijheel", &config);
        assert!(prompt.contains("Start: \"Uttara\""));
        assert!(prompt.contains("End: \"Motijheel\""));
        for mode in &config.transport_modes {
            assert!(prompt.contains(mode.as_str()), "missing mode {mode}");
        }
        assert!(prompt.contains("2-4 short, actionable"));
    }

    #[test]
    fn prompt_is_deterministic_and_trims_inputs() {
        let config = PromptConfig::default();
        let a = build_prompt("  Uttara ", "Motijheel", &config);
        let b = build_prompt("Uttara", " Motijheel  ", &config);
        assert_eq!(a, b);
    }
}
