//! Alert rendering: turns a risk summary into the subject line and
//! HTML body that the mailing step sends out.

use crate::models::{HazardHit, RiskLevel, RiskSummary};

/// Rendered alert for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub subject: String,
    pub html_body: String,
}

/// Prose phrase for a categorical level, article included
/// ("a <strong>slight</strong>", "an <strong>enhanced</strong>").
pub fn risk_phrase(level: RiskLevel) -> String {
    let article = match level {
        RiskLevel::Enhanced => "an",
        _ => "a",
    };
    format!("{} <strong>{}</strong>", article, level.description())
}

/// Human-readable hazard probability, e.g. "15%" or
/// "15% (Significant too!)".
pub fn hazard_message(hit: &HazardHit) -> String {
    let mut message = match &hit.probability {
        None => "Not a worry today.".to_string(),
        Some(label) => match label.parse::<f64>() {
            Ok(probability) => format!("{}%", (probability * 100.0) as i64),
            // band label that is not a probability, show it as-is
            Err(_) => label.clone(),
        },
    };
    if hit.significant {
        message.push_str(" (Significant too!)");
    }
    message
}

/// Render the alert for one location, or `None` when there is no
/// categorical risk. No threat, no alert.
pub fn render_alert(custom_message: &str, summary: &RiskSummary) -> Option<Alert> {
    let level = summary.categorical?;

    let subject = format!("Convection Alert! {} Risk", level.code());
    let html_body = format!(
        r#"<html>
  <body>
    <p>{custom}</p>
    <p>There is {phrase} risk of severe weather in your area. Hazard probabilities are:</p>
    <ul>
      <li><strong>Wind Gusts</strong>: {wind}</li>
      <li><strong>Hail</strong>: {hail}</li>
      <li><strong>Tornados</strong>: {tornado}</li>
    </ul>
    <p>Go to the <a href="https://www.spc.noaa.gov/products/outlook/day1otlk.html">spc webpage</a> for more information.</p>
  </body>
</html>
"#,
        custom = custom_message,
        phrase = risk_phrase(level),
        wind = hazard_message(&summary.wind),
        hail = hazard_message(&summary.hail),
        tornado = hazard_message(&summary.tornado),
    );

    Some(Alert { subject, html_body })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(probability: Option<&str>, significant: bool) -> HazardHit {
        HazardHit {
            probability: probability.map(str::to_string),
            significant,
        }
    }

    #[test]
    fn test_hazard_message_variants() {
        assert_eq!(hazard_message(&hit(None, false)), "Not a worry today.");
        assert_eq!(hazard_message(&hit(Some("0.05"), false)), "5%");
        assert_eq!(hazard_message(&hit(Some("0.15"), false)), "15%");
        assert_eq!(
            hazard_message(&hit(Some("0.15"), true)),
            "15% (Significant too!)"
        );
        assert_eq!(
            hazard_message(&hit(None, true)),
            "Not a worry today. (Significant too!)"
        );
    }

    #[test]
    fn test_risk_phrase_article() {
        assert_eq!(risk_phrase(RiskLevel::Slight), "a <strong>slight</strong>");
        assert_eq!(
            risk_phrase(RiskLevel::Enhanced),
            "an <strong>enhanced</strong>"
        );
    }

    #[test]
    fn test_no_alert_without_categorical_risk() {
        let summary = RiskSummary {
            categorical: None,
            wind: hit(Some("0.05"), false),
            ..Default::default()
        };
        assert_eq!(render_alert("hi", &summary), None);
    }

    #[test]
    fn test_render_alert_body_and_subject() {
        let summary = RiskSummary {
            categorical: Some(RiskLevel::Moderate),
            wind: hit(Some("0.30"), true),
            hail: hit(Some("0.15"), false),
            tornado: hit(None, false),
        };
        let alert = render_alert("Stay safe out there.", &summary).unwrap();

        assert_eq!(alert.subject, "Convection Alert! MDT Risk");
        assert!(alert.html_body.contains("Stay safe out there."));
        assert!(alert.html_body.contains("a <strong>moderate</strong> risk"));
        assert!(alert.html_body.contains("30% (Significant too!)"));
        assert!(alert.html_body.contains("15%"));
        assert!(alert.html_body.contains("Not a worry today."));
    }
}
