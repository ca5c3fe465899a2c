use crate::variables::VariableMap;
use crate::vertical::Vertical;

/// Demo business identity used when previewing a vertical other than
/// the deployed one. Override bundles are substituted with these values
/// so a preview never shows the real tenant's name in borrowed copy.
#[derive(Debug, Clone, Copy)]
pub struct SampleProfile {
    pub name: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub phone: &'static str,
    pub phone_dial: &'static str,
    pub email: &'static str,
    pub tagline: &'static str,
}

pub fn sample_profile(vertical: Vertical) -> &'static SampleProfile {
    match vertical {
        Vertical::Hvac => &SampleProfile {
            name: "Canyon Breeze Heating & Air",
            city: "Phoenix",
            state: "Arizona",
            phone: "(602) 555-0118",
            phone_dial: "+16025550118",
            email: "hello@canyonbreeze.example.com",
            tagline: "Comfort in every season",
        },
        Vertical::Plumbing => &SampleProfile {
            name: "Valley Plumbing Pros",
            city: "Mesa",
            state: "Arizona",
            phone: "(480) 555-0147",
            phone_dial: "+14805550147",
            email: "hello@valleyplumbing.example.com",
            tagline: "Fast fixes, honest prices",
        },
        Vertical::Electrical => &SampleProfile {
            name: "Bright Current Electric",
            city: "Tempe",
            state: "Arizona",
            phone: "(480) 555-0126",
            phone_dial: "+14805550126",
            email: "hello@brightcurrent.example.com",
            tagline: "Wired right the first time",
        },
        Vertical::Cleaning => &SampleProfile {
            name: "Fresh Nest Cleaning Co",
            city: "Scottsdale",
            state: "Arizona",
            phone: "(480) 555-0193",
            phone_dial: "+14805550193",
            email: "hello@freshnest.example.com",
            tagline: "Spotless, every visit",
        },
        Vertical::Roofing => &SampleProfile {
            name: "Summit Ridge Roofing",
            city: "Glendale",
            state: "Arizona",
            phone: "(623) 555-0171",
            phone_dial: "+16235550171",
            email: "hello@summitridge.example.com",
            tagline: "Protection from the top down",
        },
        Vertical::Landscaping => &SampleProfile {
            name: "Agave Trails Landscaping",
            city: "Chandler",
            state: "Arizona",
            phone: "(480) 555-0184",
            phone_dial: "+14805550184",
            email: "hello@agavetrails.example.com",
            tagline: "Desert yards, done beautifully",
        },
    }
}

/// Sample identity as a variable override layer. Only identity-shaped
/// keys are present; everything else (rating, years, hours) falls
/// through to the deployed defaults during lookup.
pub fn sample_variables(vertical: Vertical) -> VariableMap {
    let profile = sample_profile(vertical);
    let mut vars = VariableMap::new();
    vars.insert("businessName".to_string(), profile.name.to_string());
    vars.insert("legalName".to_string(), profile.name.to_string());
    vars.insert("city".to_string(), profile.city.to_string());
    vars.insert("state".to_string(), profile.state.to_string());
    vars.insert(
        "location".to_string(),
        format!("{}, {}", profile.city, profile.state),
    );
    vars.insert("phone".to_string(), profile.phone.to_string());
    vars.insert("phoneRaw".to_string(), profile.phone_dial.to_string());
    vars.insert("email".to_string(), profile.email.to_string());
    vars.insert("tagline".to_string(), profile.tagline.to_string());
    vars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plumbing_sample_name() {
        assert_eq!(
            sample_profile(Vertical::Plumbing).name,
            "Valley Plumbing Pros"
        );
    }

    #[test]
    fn test_every_vertical_has_a_profile() {
        for v in Vertical::ALL {
            let profile = sample_profile(v);
            assert!(!profile.name.is_empty());
            assert!(!profile.city.is_empty());
            assert!(profile.phone_dial.starts_with('+'));
        }
    }

    #[test]
    fn test_sample_variables_cover_identity_keys() {
        let vars = sample_variables(Vertical::Roofing);
        assert_eq!(vars["businessName"], "Summit Ridge Roofing");
        assert_eq!(vars["city"], "Glendale");
        assert_eq!(vars["location"], "Glendale, Arizona");
        // Non-identity keys are absent so deployed defaults apply
        assert!(!vars.contains_key("rating"));
        assert!(!vars.contains_key("yearsInBusiness"));
    }
}
