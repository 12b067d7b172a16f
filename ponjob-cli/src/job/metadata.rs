//! Job-level metadata and test-configuration selection

/// iOLM configurations offered by the tool
pub const IOLM_CONFIGS: &[&str] = &[
    "ATT F2 PON SHORT LINK",
    "ATT F2 PON",
    "ATT F2 PON MEDIUM LINK",
    "No Configuration",
];

/// OPM configurations offered by the tool
pub const OPM_CONFIGS: &[&str] = &[
    "ATT F2 PFP -21dBm",
    "ATT F2 Terminal -24dBm",
    "No Configuration",
];

/// Selection meaning "leave this test type unconfigured"
pub const NO_CONFIGURATION: &str = "No Configuration";

/// Company stamped on the first export row
pub const COMPANY: &str = "AT&T";

/// Mail domain appended to the technician UID
pub const MAIL_DOMAIN: &str = "@att.com";

/// Metadata collected once per run and constant across its records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobMetadata {
    pub cfas: String,
    /// Technician identity, already mail-domain qualified
    pub tech_id: String,
    pub clli: String,
    pub co: String,
    pub pfp: String,
    pub iolm_config: String,
    pub opm_config: String,
}

impl JobMetadata {
    /// Combined test-configuration string for the export.
    ///
    /// The selected iOLM config gets an `.iolmcfg` suffix, the OPM config an
    /// `.opmcfg` suffix, joined by `|` when both are selected. "No
    /// Configuration" counts as not selected.
    pub fn test_config(&self) -> String {
        let mut config = String::new();
        if is_selected(&self.iolm_config) {
            config.push_str(&self.iolm_config);
            config.push_str(".iolmcfg");
        }
        if is_selected(&self.opm_config) {
            if !config.is_empty() {
                config.push('|');
            }
            config.push_str(&self.opm_config);
            config.push_str(".opmcfg");
        }
        config
    }
}

fn is_selected(config: &str) -> bool {
    !config.is_empty() && !config.eq_ignore_ascii_case(NO_CONFIGURATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(iolm: &str, opm: &str) -> JobMetadata {
        JobMetadata {
            iolm_config: iolm.to_string(),
            opm_config: opm.to_string(),
            ..JobMetadata::default()
        }
    }

    #[test]
    fn test_config_both_selected() {
        assert_eq!(
            meta("ATT F2 PON", "ATT F2 PFP -21dBm").test_config(),
            "ATT F2 PON.iolmcfg|ATT F2 PFP -21dBm.opmcfg"
        );
    }

    #[test]
    fn test_config_iolm_only() {
        assert_eq!(meta("ATT F2 PON", "No Configuration").test_config(), "ATT F2 PON.iolmcfg");
    }

    #[test]
    fn test_config_opm_only() {
        assert_eq!(
            meta("no configuration", "ATT F2 Terminal -24dBm").test_config(),
            "ATT F2 Terminal -24dBm.opmcfg"
        );
    }

    #[test]
    fn test_config_none_selected() {
        assert_eq!(meta("", "No Configuration").test_config(), "");
    }
}
