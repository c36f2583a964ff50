//! # State Rendering
//!
//! Turns each [`SearchState`] into plain text for any `Write` target, so the
//! controller can run against a real terminal or a test buffer.

use std::io::Write;

use anyhow::Result;

use crate::repl::models::{CardInfo, SearchState};

/// Renders search states as text
pub struct StateRenderer {
    json: bool,
}

impl StateRenderer {
    /// `json` switches card output from the summary block to pretty JSON
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Write one state transition
    pub fn render<W: Write>(&self, state: &SearchState, out: &mut W) -> Result<()> {
        match state {
            SearchState::Empty => writeln!(out, "(nothing to show)")?,
            SearchState::Loading => writeln!(out, "Looking up...")?,
            SearchState::Error => writeln!(out, "Lookup failed. Try again in a moment.")?,
            SearchState::NoInternet => writeln!(out, "No internet connection.")?,
            SearchState::Content(card) => self.render_card(card, out)?,
        }
        out.flush()?;
        Ok(())
    }

    fn render_card<W: Write>(&self, card: &CardInfo, out: &mut W) -> Result<()> {
        if self.json {
            writeln!(out, "{}", serde_json::to_string_pretty(card)?)?;
            return Ok(());
        }

        let headline = card.headline();
        if headline.is_empty() {
            writeln!(out, "card")?;
        } else {
            writeln!(out, "{headline}")?;
        }

        if let Some(number) = &card.number {
            let mut desc = Vec::new();
            if let Some(length) = number.length {
                desc.push(format!("{length} digits"));
            }
            if number.luhn == Some(true) {
                desc.push("luhn".to_string());
            }
            if !desc.is_empty() {
                writeln!(out, "  number   {}", desc.join(", "))?;
            }
        }

        if let Some(bank) = &card.bank {
            if let Some(name) = &bank.name {
                let mut line = name.clone();
                if let Some(city) = &bank.city {
                    line.push_str(&format!(", {city}"));
                }
                if let Some(url) = &bank.url {
                    line.push_str(&format!(" ({url})"));
                }
                writeln!(out, "  bank     {line}")?;
            }
        }

        if let Some(country) = &card.country {
            if let Some(name) = &country.name {
                let mut line = String::new();
                if let Some(emoji) = &country.emoji {
                    line.push_str(emoji);
                    line.push(' ');
                }
                line.push_str(name);
                if let Some(alpha2) = &country.alpha2 {
                    line.push_str(&format!(" ({alpha2})"));
                }
                if let Some(currency) = &country.currency {
                    line.push_str(&format!(", currency {currency}"));
                }
                writeln!(out, "  country  {line}")?;
            }
        }

        if let Some(prepaid) = card.prepaid {
            writeln!(out, "  prepaid  {}", if prepaid { "yes" } else { "no" })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::models::{Bank, Country, NumberInfo};

    fn sample_card() -> CardInfo {
        CardInfo {
            scheme: Some("visa".to_string()),
            card_type: Some("debit".to_string()),
            brand: Some("Visa/Dankort".to_string()),
            prepaid: Some(false),
            number: Some(NumberInfo {
                length: Some(16),
                luhn: Some(true),
            }),
            bank: Some(Bank {
                name: Some("Jyske Bank".to_string()),
                url: Some("www.jyskebank.dk".to_string()),
                phone: None,
                city: Some("Hjørring".to_string()),
            }),
            country: Some(Country {
                name: Some("Denmark".to_string()),
                alpha2: Some("DK".to_string()),
                currency: Some("DKK".to_string()),
                ..Country::default()
            }),
        }
    }

    fn rendered(renderer: &StateRenderer, state: &SearchState) -> String {
        let mut out = Vec::new();
        renderer.render(state, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_simple_states() {
        let renderer = StateRenderer::new(false);

        assert_eq!(rendered(&renderer, &SearchState::Empty), "(nothing to show)\n");
        assert_eq!(rendered(&renderer, &SearchState::Loading), "Looking up...\n");
        assert!(rendered(&renderer, &SearchState::Error).contains("failed"));
        assert!(rendered(&renderer, &SearchState::NoInternet).contains("internet"));
    }

    #[test]
    fn test_render_card_summary() {
        let renderer = StateRenderer::new(false);
        let text = rendered(&renderer, &SearchState::Content(sample_card()));

        assert!(text.starts_with("visa debit (Visa/Dankort)\n"));
        assert!(text.contains("16 digits, luhn"));
        assert!(text.contains("Jyske Bank, Hjørring (www.jyskebank.dk)"));
        assert!(text.contains("Denmark (DK), currency DKK"));
        assert!(text.contains("prepaid  no"));
    }

    #[test]
    fn test_render_card_json() {
        let renderer = StateRenderer::new(true);
        let text = rendered(&renderer, &SearchState::Content(sample_card()));

        let parsed: CardInfo = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, sample_card());
    }

    #[test]
    fn test_render_bare_card() {
        let renderer = StateRenderer::new(false);
        let text = rendered(&renderer, &SearchState::Content(CardInfo::default()));
        assert_eq!(text, "card\n");
    }
}
