//! Identifier conventions for target languages.

/// How configuration names become identifiers in a target language.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Entity name to type name (e.g. "user_account" -> "UserAccount")
    pub to_type: fn(&str) -> String,
    /// Entity name to field, method or parameter name
    pub to_member: fn(&str) -> String,
    /// Entity name to constant name (e.g. "userId" -> "USER_ID")
    pub to_constant: fn(&str) -> String,
    /// Words that cannot be used as identifiers
    pub reserved_words: &'static [&'static str],
    /// Turn a reserved word into a legal identifier
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// `name`, escaped if it is reserved.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    pub fn type_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_type)(name))
    }

    pub fn member_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_member)(name))
    }

    pub fn constant_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_constant)(name))
    }
}
