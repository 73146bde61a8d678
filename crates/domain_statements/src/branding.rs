//! Company details printed on every statement

use serde::{Deserialize, Serialize};

/// Header and footer text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    pub company_name: String,
    pub subtitle: String,
    pub abn: String,
    pub afsl: String,
    pub legal_name: String,
    pub phone: String,
    pub email: String,
    pub confidentiality_note: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            company_name: "TrustWise Capital".to_string(),
            subtitle: "Unit Trust Management".to_string(),
            abn: "12 345 678 901".to_string(),
            afsl: "123456".to_string(),
            legal_name: "TrustWise Capital Pty Ltd".to_string(),
            phone: "+61 2 9000 0000".to_string(),
            email: "info@trustwise.com.au".to_string(),
            confidentiality_note:
                "This statement is confidential and intended for the named investor only."
                    .to_string(),
        }
    }
}

impl Branding {
    /// Footer lines, top to bottom
    pub fn footer(&self) -> Vec<String> {
        vec![
            self.confidentiality_note.clone(),
            format!("{} | Phone: {} | Email: {}", self.legal_name, self.phone, self.email),
            "Page 1 of 1".to_string(),
        ]
    }
}
