//! Static presentation data. Display-only; nothing here changes at runtime.

use serde::Serialize;

pub const BRAND: &str = "SPYCYBER";

pub const DEVICE_NAME: &str = "Galaxy S10";

/// Image shown in the "Last Known Locations" card.
pub const MAP_ASSET_PATH: &str = "./src/tiwa.gif";

pub const MAP_CAPTION: &str = "Activity map based on recent signals";

pub const FOOTER_TEXT: &str = "Amount: $400";

pub const DEVICE_SYNC_NOTE: &str = "* The device information will sync uevery 30 minutes.";

/// One labelled row of the "Device information" card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceField {
    pub label: &'static str,
    pub value: &'static str,
}

// The "Zipcode" slot carries the OS version value, as the product shows it.
// Which one is intended is unknown, so both slots are kept as-is.
pub const DEVICE_INFO: [DeviceField; 3] = [
    DeviceField { label: "Device Model", value: "Galaxy S10" },
    DeviceField { label: "Device OS Version", value: "10.0" },
    DeviceField { label: "Zipcode", value: "10.0" },
];

/// A row in the recent-contacts and recent-messages previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactSample {
    pub name: &'static str,
    pub phone: &'static str,
    pub count: u32,
}

pub const SAMPLE_CONTACTS: [ContactSample; 5] = [
    ContactSample { name: "Martin", phone: "429-748-1384", count: 69 },
    ContactSample { name: "John E. Washington", phone: "931-468-7430", count: 22 },
    ContactSample { name: "Damien", phone: "513-851-2116", count: 17 },
    ContactSample { name: "Myrtle Torres", phone: "208-424-4913", count: 15 },
    ContactSample { name: "Barton", phone: "205-749-1334", count: 11 },
];

pub const SAMPLE_MESSAGES: [ContactSample; 5] = [
    ContactSample { name: "John Doe", phone: "705-234-1234", count: 1 },
    ContactSample { name: "Frankie", phone: "705-929-7819", count: 1 },
    ContactSample { name: "Gerald", phone: "418-296-7261", count: 1 },
    ContactSample { name: "Ice", phone: "416-829-8001", count: 1 },
    ContactSample { name: "Selena", phone: "250-776-4040", count: 1 },
];

/// Fixed copy of the restricted-feature modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestrictedModal {
    pub title: &'static str,
    pub body: &'static str,
    pub contact_label: &'static str,
    pub back_label: &'static str,
    pub admin_contact: String,
}

impl RestrictedModal {
    pub fn new(admin_contact: &str) -> Self {
        Self {
            title: "Access Restricted",
            body: "This feature is not available right now. Please contact your administrator.",
            contact_label: "Contact Administrator",
            back_label: "Go Back to Dashboard",
            admin_contact: admin_contact.to_string(),
        }
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.admin_contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_link() {
        let modal = RestrictedModal::new("admin@spycyber.com");
        assert_eq!(modal.mailto(), "mailto:admin@spycyber.com");
        assert_eq!(modal.title, "Access Restricted");
    }

    #[test]
    fn test_zipcode_slot_is_preserved() {
        let zipcode = DEVICE_INFO.iter().find(|f| f.label == "Zipcode").unwrap();
        let os = DEVICE_INFO.iter().find(|f| f.label == "Device OS Version").unwrap();
        assert_eq!(zipcode.value, os.value);
    }
}
