use javagen_model::Modifier;

/// A fixed token with a single literal spelling.
pub trait Token {
    fn text(&self) -> &'static str;
}

impl Token for Modifier {
    fn text(&self) -> &'static str {
        self.keyword()
    }
}
