//! Common types for the front end
//!
//! Optimization modes, the form fields each one reads, and the raw values
//! collected from a submitted form.

/// Form field holding the comma-separated ticker list
pub const TICKERS_FIELD: &str = "tickers";
pub const TOTAL_PORTFOLIO_VALUE_FIELD: &str = "totalPortfolioValue";
pub const TARGET_VOLATILITY_FIELD: &str = "targetVolatility";
pub const TARGET_RETURN_FIELD: &str = "targetReturn";
pub const TARGET_CVAR_FIELD: &str = "targetCVaR";

/// How a form field is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Comma-separated ticker symbols
    Tickers,
    /// Positive whole number
    Integer,
    /// Finite decimal number
    Decimal,
}

/// A single input on a mode's form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

const TICKERS: FormField = FormField {
    name: TICKERS_FIELD,
    label: "Tickers (comma separated)",
    placeholder: "MSFT, AMZN, KO, MA, COST",
    kind: FieldKind::Tickers,
};

const TOTAL_PORTFOLIO_VALUE: FormField = FormField {
    name: TOTAL_PORTFOLIO_VALUE_FIELD,
    label: "Total Portfolio Value",
    placeholder: "10000",
    kind: FieldKind::Integer,
};

const TARGET_VOLATILITY: FormField = FormField {
    name: TARGET_VOLATILITY_FIELD,
    label: "Target Volatility",
    placeholder: "0.15",
    kind: FieldKind::Decimal,
};

const TARGET_RETURN: FormField = FormField {
    name: TARGET_RETURN_FIELD,
    label: "Target Return",
    placeholder: "0.07",
    kind: FieldKind::Decimal,
};

const TARGET_CVAR: FormField = FormField {
    name: TARGET_CVAR_FIELD,
    label: "Target CVaR",
    placeholder: "0.025",
    kind: FieldKind::Decimal,
};

/// Optimization mode, one per optimizer endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptimizationMode {
    MinVolatility,
    MaxSharpe,
    MaximizeReturnGivenRisk,
    MinimizeRiskGivenReturn,
    EfficientSemivariance,
    EfficientCvar,
    Hrp,
}

impl OptimizationMode {
    /// Every mode, in page order
    pub const ALL: [OptimizationMode; 7] = [
        OptimizationMode::MinVolatility,
        OptimizationMode::MaxSharpe,
        OptimizationMode::MaximizeReturnGivenRisk,
        OptimizationMode::MinimizeRiskGivenReturn,
        OptimizationMode::EfficientSemivariance,
        OptimizationMode::EfficientCvar,
        OptimizationMode::Hrp,
    ];

    /// Path of the optimizer endpoint, relative to the API origin
    pub fn endpoint(self) -> &'static str {
        match self {
            OptimizationMode::MinVolatility => "/optimize_min_volatility",
            OptimizationMode::MaxSharpe => "/max_sharpe_with_sector_constraints",
            OptimizationMode::MaximizeReturnGivenRisk => "/maximize_return_given_risk",
            OptimizationMode::MinimizeRiskGivenReturn => "/minimize_risk_given_return",
            OptimizationMode::EfficientSemivariance => "/efficient_semivariance",
            OptimizationMode::EfficientCvar => "/efficient_cvar",
            OptimizationMode::Hrp => "/optimize_hrp",
        }
    }

    /// DOM id of the form that drives this mode
    pub fn form_id(self) -> &'static str {
        match self {
            OptimizationMode::MinVolatility => "minVolatilityForm",
            OptimizationMode::MaxSharpe => "maxSharpeForm",
            OptimizationMode::MaximizeReturnGivenRisk => "maximizeReturnGivenRiskForm",
            OptimizationMode::MinimizeRiskGivenReturn => "minimizeRiskGivenReturnForm",
            OptimizationMode::EfficientSemivariance => "efficientSemivarianceForm",
            OptimizationMode::EfficientCvar => "efficientCVaRForm",
            OptimizationMode::Hrp => "hrpForm",
        }
    }

    /// Human-readable title
    pub fn title(self) -> &'static str {
        match self {
            OptimizationMode::MinVolatility => "Minimum Volatility",
            OptimizationMode::MaxSharpe => "Max Sharpe with Sector Constraints",
            OptimizationMode::MaximizeReturnGivenRisk => "Maximize Return for a Given Risk",
            OptimizationMode::MinimizeRiskGivenReturn => "Minimize Risk for a Given Return",
            OptimizationMode::EfficientSemivariance => "Efficient Semivariance",
            OptimizationMode::EfficientCvar => "Efficient CVaR",
            OptimizationMode::Hrp => "Hierarchical Risk Parity",
        }
    }

    /// Inputs read from this mode's form
    pub fn fields(self) -> &'static [FormField] {
        match self {
            OptimizationMode::MinVolatility => &[TICKERS, TOTAL_PORTFOLIO_VALUE],
            OptimizationMode::MaxSharpe | OptimizationMode::Hrp => &[TICKERS],
            OptimizationMode::MaximizeReturnGivenRisk => &[TICKERS, TARGET_VOLATILITY],
            OptimizationMode::MinimizeRiskGivenReturn
            | OptimizationMode::EfficientSemivariance => &[TICKERS, TARGET_RETURN],
            OptimizationMode::EfficientCvar => &[TICKERS, TARGET_CVAR],
        }
    }
}

impl std::fmt::Display for OptimizationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Raw string values collected from a submitted form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: Vec<(String, String)>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any earlier value for the same name
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.values.push((name, value)),
        }
        self
    }

    /// Value of a field, if the form supplied one
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FormValues::new();
        for (name, value) in iter {
            form.set(name, value);
        }
        form
    }
}
