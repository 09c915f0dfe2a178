use serde::{Deserialize, Serialize};

use crate::error::ExplorerError;
use crate::stepper::WrapPolicy;

/// Y-axis of the age/sex chart: population-adjusted rate or raw estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisMode {
    #[default]
    Rate,
    Count,
}

/// Number of summary-table rows shown before truncating into "Other".
pub const DEFAULT_SUMMARY_ROWS: usize = 5;

/// Startup defaults for a session, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Product selected when the session opens, if any
    pub product: Option<u32>,
    pub axis: AxisMode,
    pub summary_rows: Option<usize>,
    pub wrap: WrapPolicy,
}

impl SessionConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ExplorerError> {
        Ok(toml::from_str(toml_str)?)
    }
}

/// Input state owned by one interactive session.
///
/// The original design tracked forward and backward narrative clicks as two
/// independent counters; here they collapse into one signed net position,
/// bumped once per click. The position persists across a change of selected
/// product and resets only when a new session starts. Sessions are never
/// shared between users.
#[derive(Debug, Clone)]
pub struct Session {
    product: Option<u32>,
    axis: AxisMode,
    summary_rows: usize,
    wrap: WrapPolicy,
    net_position: i64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            product: None,
            axis: AxisMode::default(),
            summary_rows: DEFAULT_SUMMARY_ROWS,
            wrap: WrapPolicy::default(),
            net_position: 0,
        }
    }

    pub fn with_config(config: SessionConfig) -> Result<Self, ExplorerError> {
        let mut session = Self::new();
        session.product = config.product;
        session.axis = config.axis;
        session.wrap = config.wrap;
        if let Some(rows) = config.summary_rows {
            session.try_set_summary_rows(rows)?;
        }
        Ok(session)
    }

    pub fn product(&self) -> Option<u32> {
        self.product
    }

    pub fn axis(&self) -> AxisMode {
        self.axis
    }

    pub fn summary_rows(&self) -> usize {
        self.summary_rows
    }

    pub fn wrap_policy(&self) -> WrapPolicy {
        self.wrap
    }

    /// Net narrative position: forward clicks minus backward clicks.
    pub fn net_position(&self) -> i64 {
        self.net_position
    }

    pub fn select_product(&mut self, code: u32) {
        self.product = Some(code);
    }

    pub fn set_axis(&mut self, axis: AxisMode) {
        self.axis = axis;
    }

    /// Sets the summary row count, rejecting zero.
    pub fn try_set_summary_rows(&mut self, rows: usize) -> Result<(), ExplorerError> {
        if rows == 0 {
            return Err(ExplorerError::InvalidRequest(
                "Summary row count must be greater than 0".to_string(),
            ));
        }
        self.summary_rows = rows;
        Ok(())
    }

    /// Sets the summary row count, falling back to the default on zero.
    pub fn set_summary_rows(&mut self, rows: usize) {
        if let Err(err) = self.try_set_summary_rows(rows) {
            log::warn!("Invalid summary row count: {err}");
            self.summary_rows = DEFAULT_SUMMARY_ROWS;
        }
    }

    pub fn set_wrap_policy(&mut self, wrap: WrapPolicy) {
        self.wrap = wrap;
    }

    /// One "next narrative" click.
    pub fn advance(&mut self) {
        self.net_position = self.net_position.saturating_add(1);
    }

    /// One "previous narrative" click.
    pub fn step_back(&mut self) {
        self.net_position = self.net_position.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisMode, Session, SessionConfig, DEFAULT_SUMMARY_ROWS};
    use crate::error::ExplorerError;
    use crate::stepper::WrapPolicy;

    #[test]
    fn defaults_match_the_ui_surface() {
        let session = Session::new();
        assert_eq!(session.product(), None);
        assert_eq!(session.axis(), AxisMode::Rate);
        assert_eq!(session.summary_rows(), DEFAULT_SUMMARY_ROWS);
        assert_eq!(session.wrap_policy(), WrapPolicy::Single);
        assert_eq!(session.net_position(), 0);
    }

    #[test]
    fn clicks_move_the_net_position() {
        let mut session = Session::new();
        session.advance();
        session.advance();
        session.step_back();
        assert_eq!(session.net_position(), 1);
    }

    #[test]
    fn position_persists_across_product_change() {
        let mut session = Session::new();
        session.advance();
        session.select_product(649);
        assert_eq!(session.net_position(), 1);
    }

    #[test]
    fn zero_rows_rejected_or_normalized() {
        let mut session = Session::new();
        assert!(matches!(
            session.try_set_summary_rows(0),
            Err(ExplorerError::InvalidRequest(_))
        ));

        session.set_summary_rows(10);
        assert_eq!(session.summary_rows(), 10);
        session.set_summary_rows(0);
        assert_eq!(session.summary_rows(), DEFAULT_SUMMARY_ROWS);
    }

    #[test]
    fn config_parses_from_toml() {
        let config = SessionConfig::from_toml_str(
            r#"
                product = 1842
                axis = "count"
                summary_rows = 8
                wrap = "modulo"
            "#,
        )
        .unwrap();

        let session = Session::with_config(config).unwrap();
        assert_eq!(session.product(), Some(1842));
        assert_eq!(session.axis(), AxisMode::Count);
        assert_eq!(session.summary_rows(), 8);
        assert_eq!(session.wrap_policy(), WrapPolicy::Modulo);
    }

    #[test]
    fn config_rejects_unknown_fields_and_zero_rows() {
        assert!(matches!(
            SessionConfig::from_toml_str("rows = 3"),
            Err(ExplorerError::TomlError(_))
        ));

        let config = SessionConfig::from_toml_str("summary_rows = 0").unwrap();
        assert!(matches!(
            Session::with_config(config),
            Err(ExplorerError::InvalidRequest(_))
        ));
    }
}
