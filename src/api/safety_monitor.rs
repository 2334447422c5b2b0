use macro_rules_attribute::apply;

/// SafetyMonitor Specific Methods.
#[apply(rpc_trait)]
pub trait SafetyMonitor: Device {
    /// Indicates whether the monitored state is safe for use.
    ///
    /// True if the state is safe, False if it is unsafe.
    #[http("issafe", method = Get)]
    fn is_safe(&self) -> Result<bool>;
}
