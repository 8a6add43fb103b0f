use super::field::Text;

dto! {
    /// A string for one language tag, e.g. the Japanese `client_name#ja`.
    pub struct TaggedValue {
        /// Language tag (BCP 47), `None` for the untagged default
        tag, set_tag: Text => "tag";
        /// The localized string
        value, set_value: Text => "value";
    }
}

impl TaggedValue {
    /// Creates a tagged value from its two parts
    pub fn of(tag: impl Into<String>, value: impl Into<String>) -> Self {
        let mut tagged = Self::new();
        tagged.set_tag(tag.into()).set_value(value.into());
        tagged
    }
}
