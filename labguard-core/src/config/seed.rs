//! Default analyte panel shipped with the application.

use crate::types::ControlConfig;

/// The standard biochemistry control panel, with manufacturer targets.
pub fn seed_panel() -> Vec<ControlConfig> {
    vec![
        ControlConfig::new("glucose_cal", "Glucose CAL", 112.0, 3.6, "mg/dL"),
        ControlConfig::new("cholesterol", "Cholesterol", 197.0, 2.5, "mg/dL"),
        ControlConfig::new("triglycerides", "Triglycerides", 154.0, 2.6, "mg/dL"),
        ControlConfig::new("urea", "Urea", 37.0, 2.7, "mg/dL"),
        ControlConfig::new("creatinine_p", "Creatinine P", 1.08, 0.1, "mg/dL"),
        ControlConfig::new("uric_acid", "Uric Acid", 6.6, 0.5, "mg/dL"),
        ControlConfig::new("tgo", "TGO", 19.0, 2.0, "U/L"),
        ControlConfig::new("tgp", "TGP", 29.0, 2.0, "U/L"),
        ControlConfig::new("alp_dgkc", "ALP DGKC 137 / 131", 55.0, 5.5, "U/L"),
        ControlConfig::new("amylase", "Amylase", 48.0, 5.0, "U/L"),
        ControlConfig::new("cpk_total", "CPK Total", 79.0, 8.0, "U/L"),
        ControlConfig::new("hdl_eva_50", "HDL EVA 50", 40.0, 3.0, "mg/dL"),
        ControlConfig::new("cholesterol_p200", "Cholesterol P200", 195.0, 4.6, "mg/dL"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_ids_are_unique() {
        let panel = seed_panel();
        let mut ids: Vec<&str> = panel.iter().map(|c| c.analyte_id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), panel.len());
    }

    #[test]
    fn panel_has_established_variance() {
        for control in seed_panel() {
            assert!(control.sd > 0.0, "{} has zero sd", control.analyte_id);
            assert!(control.mean.is_finite());
        }
    }
}
