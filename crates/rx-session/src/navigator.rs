/// Performs the navigation a guard decision implies.
pub trait Navigator {
    /// Full navigation; the current page state is abandoned.
    fn redirect(&mut self, url: &str);

    /// Rewrite the address bar in place, no navigation and no history entry.
    fn replace_current_url(&mut self, url: &str);
}
