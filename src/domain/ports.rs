/// Supplies the raw, unparsed inputs of a report.
///
/// Implemented by the command line configuration and by TOML profiles so the
/// report engine never cares where a name or date came from.
pub trait ProfileProvider {
    fn birth_name(&self) -> Option<&str>;
    fn birth_date(&self) -> Option<&str>;
    fn partner_name(&self) -> Option<&str>;
    fn partner_birth_date(&self) -> Option<&str>;
    fn address(&self) -> Option<&str>;
    fn business(&self) -> Option<&str>;
    /// Reference date for personal cycles; `None` means today.
    fn as_of(&self) -> Option<&str>;
}
