use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1, max = 500))]
    pub prompt: String,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 20))]
    pub limit: u16,
}

fn default_limit() -> u16 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_bounds() {
        let ok = SearchRequest { prompt: "fitness".to_string(), limit: 20 };
        assert!(ok.validate().is_ok());

        let zero = SearchRequest { prompt: "fitness".to_string(), limit: 0 };
        assert!(zero.validate().is_err());

        let too_many = SearchRequest { prompt: "fitness".to_string(), limit: 21 };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_empty_prompt_rejected() {
        let req = SearchRequest { prompt: String::new(), limit: 5 };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_default_limit() {
        let req: SearchRequest = serde_json::from_str(r#"{"prompt": "tech"}"#).unwrap();
        assert_eq!(req.limit, 5);
    }
}
