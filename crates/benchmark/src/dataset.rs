//! Dataset types for cutting-stock benchmark instances.

use serde::{Deserialize, Serialize};
use u_cutstock_d1::{CutCalculatorInput, CutRequirement, LinearItem, Pricing, StockItem};

/// Information about a benchmark dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Dataset name
    pub name: String,
    /// Short description
    pub description: Option<String>,
    /// Number of stock item types
    pub stock_types: usize,
    /// Number of cut requirement types
    pub cut_types: usize,
    /// Total pieces when demand is expanded
    pub total_pieces: usize,
    /// Total bars available
    pub total_bars: usize,
    /// Kerf width
    pub kerf_width: f64,
    /// Best known bar count
    pub best_known: Option<usize>,
}

/// A named cutting-stock instance.
///
/// The calculator input is flattened, so a bare input document is also a
/// valid dataset file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Dataset name
    #[serde(default = "default_name")]
    pub name: String,
    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The calculator input
    #[serde(flatten)]
    pub input: CutCalculatorInput,
    /// Best known bar count (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_known: Option<usize>,
}

fn default_name() -> String {
    "unnamed".to_string()
}

impl Dataset {
    /// Creates a dataset from a calculator input.
    pub fn new(name: impl Into<String>, input: CutCalculatorInput) -> Self {
        Self {
            name: name.into(),
            description: None,
            input,
            best_known: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the best known bar count.
    pub fn with_best_known(mut self, bars: usize) -> Self {
        self.best_known = Some(bars);
        self
    }

    /// Returns dataset information.
    pub fn info(&self) -> DatasetInfo {
        DatasetInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            stock_types: self.input.stock_items.len(),
            cut_types: self.input.requirements.len(),
            total_pieces: self.input.total_cut_count(),
            total_bars: self.input.total_stock_count(),
            kerf_width: self.input.kerf_width,
            best_known: self.best_known,
        }
    }

    /// Lower bound on bars needed: total cut length over the longest bar.
    pub fn lower_bound(&self) -> usize {
        let longest = self.input.max_stock_length().unwrap_or(0.0);
        if longest <= 0.0 {
            return 0;
        }
        (self.input.total_cut_length() / longest).ceil() as usize
    }

    /// Names of the built-in datasets.
    pub fn builtin_names() -> Vec<&'static str> {
        vec!["basic", "workshop", "frame"]
    }

    /// Returns a built-in dataset by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "basic" => Some(
                Self::new(
                    "basic",
                    CutCalculatorInput::new(
                        vec![StockItem::new("1", 1000.0).with_quantity(2)],
                        vec![
                            CutRequirement::new("a", 450.0).with_quantity(2),
                            CutRequirement::new("b", 300.0),
                        ],
                    )
                    .with_kerf_width(4.0),
                )
                .with_description("Two 450mm and one 300mm cut from 1m bars")
                .with_best_known(2),
            ),
            "workshop" => Some(
                Self::new(
                    "workshop",
                    CutCalculatorInput::new(
                        vec![
                            StockItem::new("6m", 6000.0).with_quantity(5),
                            StockItem::new("3m", 3000.0).with_quantity(4),
                            StockItem::new("1m", 1000.0).with_quantity(6),
                        ],
                        vec![
                            CutRequirement::new("legs", 720.0).with_quantity(8),
                            CutRequirement::new("rails", 1180.0).with_quantity(6),
                            CutRequirement::new("braces", 410.0).with_quantity(6),
                            CutRequirement::new("long", 2400.0).with_quantity(2),
                            CutRequirement::new("stubs", 95.0).with_quantity(10),
                        ],
                    )
                    .with_kerf_width(3.2)
                    .with_pricing(Pricing::from_pairs([
                        (6000.0, 54.0),
                        (3000.0, 29.0),
                        (1000.0, 11.0),
                    ])),
                )
                .with_description("Mixed bench frame job over three stock lengths"),
            ),
            "frame" => Some(
                Self::new(
                    "frame",
                    CutCalculatorInput::new(
                        vec![StockItem::new("2020-1m", 1000.0).with_quantity(12)],
                        vec![
                            CutRequirement::new("x", 460.0).with_quantity(4),
                            CutRequirement::new("y", 420.0).with_quantity(4),
                            CutRequirement::new("z", 500.0).with_quantity(4),
                        ],
                    )
                    .with_kerf_width(2.5)
                    .with_pricing(Pricing::from_pairs([(1000.0, 7.9)])),
                )
                .with_description("20-series printer frame: 12 extrusion cuts"),
            ),
            _ => None,
        }
    }

    /// Expands requirements by quantity, returning individual pieces.
    pub fn expand_pieces(&self) -> Vec<(String, f64)> {
        self.input
            .requirements
            .iter()
            .flat_map(|r| std::iter::repeat((r.id().clone(), r.length())).take(r.quantity()))
            .collect()
    }
}
