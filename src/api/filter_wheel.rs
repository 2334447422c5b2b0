use macro_rules_attribute::apply;

/// FilterWheel Specific Methods.
#[apply(rpc_trait)]
pub trait FilterWheel: Device {
    /// An integer array of filter focus offsets.
    #[http("focusoffsets", method = Get)]
    fn focus_offsets(&self) -> Result<Vec<i32>>;

    /// The names of the filters.
    #[http("names", method = Get)]
    fn names(&self) -> Result<Vec<String>>;

    /// Returns the current filter wheel position.
    ///
    /// `-1` while the wheel is moving.
    #[http("position", method = Get)]
    fn position(&self) -> Result<i32>;

    /// Sets the filter wheel position.
    #[http("position", method = Put)]
    fn set_position(&self, #[http("Position")] position: i32) -> Result<()>;
}
