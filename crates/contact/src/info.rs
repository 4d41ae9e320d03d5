use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
    pub github: String,
    pub instagram: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            facebook: "#".to_owned(),
            twitter: "#".to_owned(),
            linkedin: "#".to_owned(),
            github: "#".to_owned(),
            instagram: "#".to_owned(),
        }
    }
}

/// Public contact details of the site owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub social: SocialLinks,
}

impl ContactInfo {
    pub fn mailto_link(&self, subject: &str) -> String {
        if subject.is_empty() {
            return format!("mailto:{}", self.email);
        }

        format!(
            "mailto:{}?subject={}",
            self.email,
            urlencoding::encode(subject)
        )
    }

    pub fn tel_link(&self) -> String {
        let digits = self
            .phone
            .chars()
            .filter(char::is_ascii_digit)
            .collect::<String>();

        format!("tel:+{digits}")
    }
}
