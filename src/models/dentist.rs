use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dentist {
    pub id: u64,
    pub name: String,
    pub practice: String,
    pub rating: f64,
    pub reviews: u32,
    pub specialty: String,
    /// "$", "$$" or "$$$"
    pub price: String,
    pub location: String,
    pub image: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub consultation_fee: String,
}

impl Dentist {
    pub fn from_json_list(json: &str) -> anyhow::Result<Vec<Dentist>> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_list() {
        let json = r#"[{
            "id": 7,
            "name": "Dr. Elena Ortiz",
            "practice": "Sonrisa Dental Studio",
            "rating": 4.9,
            "reviews": 212,
            "specialty": "Implantology",
            "price": "$$",
            "location": "Zona Romantica",
            "image": "/img/ortiz.jpg",
            "services": ["Implants", "Crowns", "Cleaning"],
            "description": "Fifteen years treating visiting patients.",
            "languages": ["English", "Spanish"],
            "consultationFee": "Free"
        }]"#;
        let dentists = Dentist::from_json_list(json).unwrap();
        assert_eq!(dentists.len(), 1);
        assert_eq!(dentists[0].consultation_fee, "Free");
        assert_eq!(dentists[0].services.len(), 3);
    }

    #[test]
    fn test_missing_services_defaults_to_empty() {
        let json = r#"[{"id":1,"name":"A","practice":"B","rating":4.0,"reviews":0,
            "specialty":"General","price":"$","location":"Centro","image":""}]"#;
        let dentists = Dentist::from_json_list(json).unwrap();
        assert!(dentists[0].services.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(Dentist::from_json_list("not json").is_err());
    }
}
