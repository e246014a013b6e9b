use serde::{Deserialize, Serialize};

/// Transferable view of an account's state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub id: String,
    pub name: String,
    /// Current spendable amount
    pub balance: f64,
    /// Amount credited each time the weekly allowance is applied
    pub weekly_allowance: f64,
}

/// Request for depositing money into an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositRequest {
    pub amount: f64,
}

/// Response after depositing money
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositResponse {
    pub success_message: String,
    pub new_balance: f64,
    pub formatted_amount: String,
}

/// Request for spending money from an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendRequest {
    pub amount: f64,
}

/// Response after spending money
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendResponse {
    pub success_message: String,
    pub new_balance: f64,
    pub formatted_amount: String,
}

/// Request for replacing the weekly allowance amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateWeeklyAllowanceRequest {
    pub amount: f64,
}

/// Response after updating the weekly allowance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateWeeklyAllowanceResponse {
    pub weekly_allowance: f64,
    pub success_message: String,
}

/// Response after crediting the weekly allowance to an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyWeeklyAllowanceResponse {
    pub amount_applied: f64,
    pub new_balance: f64,
    pub success_message: String,
}

/// Configuration for account display and logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountConfig {
    pub currency_symbol: String,
    pub enable_debug_logging: bool,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            enable_debug_logging: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_snapshot_json_shape() {
        let snapshot = AccountSnapshot {
            id: "id-1".to_string(),
            name: "Alice".to_string(),
            balance: 70.0,
            weekly_allowance: 25.0,
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["id"], "id-1");
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["balance"], 70.0);
        assert_eq!(json["weekly_allowance"], 25.0);

        let parsed: AccountSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_account_config_default() {
        let config = AccountConfig::default();
        assert_eq!(config.currency_symbol, "$");
        assert!(!config.enable_debug_logging);
    }
}
