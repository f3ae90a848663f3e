//! Static expense category catalog.
//!
//! Every [`ExpenseType`] owns a fixed table of [`SubtypeMeta`] rows carrying the
//! subtype display name and an optional spending ceiling. The tables are
//! read-only and shared by the whole process.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::{ExpenseError, Result};

/// Top-level expense classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseType {
    Meal,
    Travel,
}

impl ExpenseType {
    /// Catalog order; reverse subtype lookups scan types in this order.
    pub const ALL: [ExpenseType; 2] = [ExpenseType::Meal, ExpenseType::Travel];

    pub fn display_name(self) -> &'static str {
        type_display_name(self)
    }

    pub fn subtypes(self) -> &'static [SubtypeMeta] {
        subtypes_of(self)
    }

    fn tag(self) -> &'static str {
        match self {
            ExpenseType::Meal => "MEAL",
            ExpenseType::Travel => "TRAVEL",
        }
    }
}

/// Second-level classification, scoped to a single [`ExpenseType`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseSubType {
    Breakfast,
    Lunch,
    Dinner,
    CarRental,
    Metro,
    Bus,
}

impl ExpenseSubType {
    pub const ALL: [ExpenseSubType; 6] = [
        ExpenseSubType::Breakfast,
        ExpenseSubType::Lunch,
        ExpenseSubType::Dinner,
        ExpenseSubType::CarRental,
        ExpenseSubType::Metro,
        ExpenseSubType::Bus,
    ];

    fn tag(self) -> &'static str {
        match self {
            ExpenseSubType::Breakfast => "BREAKFAST",
            ExpenseSubType::Lunch => "LUNCH",
            ExpenseSubType::Dinner => "DINNER",
            ExpenseSubType::CarRental => "CAR_RENTAL",
            ExpenseSubType::Metro => "METRO",
            ExpenseSubType::Bus => "BUS",
        }
    }
}

/// Catalog row describing one subtype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubtypeMeta {
    pub sub_type: ExpenseSubType,
    pub display_name: &'static str,
    /// `None` means spending under this subtype is never flagged.
    pub max_spend_limit: Option<f64>,
}

const fn meta(
    sub_type: ExpenseSubType,
    display_name: &'static str,
    max_spend_limit: Option<f64>,
) -> SubtypeMeta {
    SubtypeMeta {
        sub_type,
        display_name,
        max_spend_limit,
    }
}

static MEAL_SUBTYPES: [SubtypeMeta; 3] = [
    meta(ExpenseSubType::Breakfast, "Breakfast", Some(30.0)),
    meta(ExpenseSubType::Lunch, "Lunch", Some(70.0)),
    meta(ExpenseSubType::Dinner, "Dinner", Some(100.0)),
];

static TRAVEL_SUBTYPES: [SubtypeMeta; 3] = [
    meta(ExpenseSubType::CarRental, "Car Rental", None),
    meta(ExpenseSubType::Metro, "Metro", None),
    meta(ExpenseSubType::Bus, "Bus", None),
];

pub fn type_display_name(expense_type: ExpenseType) -> &'static str {
    match expense_type {
        ExpenseType::Meal => "Meal",
        ExpenseType::Travel => "Travel",
    }
}

pub fn subtypes_of(expense_type: ExpenseType) -> &'static [SubtypeMeta] {
    match expense_type {
        ExpenseType::Meal => &MEAL_SUBTYPES,
        ExpenseType::Travel => &TRAVEL_SUBTYPES,
    }
}

/// Resolves the catalog row for a `(type, subtype)` pair.
///
/// Fails with [`ExpenseError::InvalidCategoryReference`] when the subtype is
/// not registered under the given type.
pub fn subtype_meta(
    expense_type: ExpenseType,
    expense_sub_type: ExpenseSubType,
) -> Result<&'static SubtypeMeta> {
    subtypes_of(expense_type)
        .iter()
        .find(|row| row.sub_type == expense_sub_type)
        .ok_or(ExpenseError::InvalidCategoryReference {
            expense_type,
            expense_sub_type,
        })
}

/// Finds the display name of `expense_sub_type` under whichever type lists it
/// first, scanning types in [`ExpenseType::ALL`] order.
pub fn subtype_display_name_any_type(expense_sub_type: ExpenseSubType) -> Option<&'static str> {
    ExpenseType::ALL.iter().find_map(|expense_type| {
        subtypes_of(*expense_type)
            .iter()
            .find(|row| row.sub_type == expense_sub_type)
            .map(|row| row.display_name)
    })
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl fmt::Display for ExpenseSubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

fn normalize_tag(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|ch| match ch {
            ' ' | '-' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

impl FromStr for ExpenseType {
    type Err = ExpenseError;

    fn from_str(value: &str) -> Result<Self> {
        let tag = normalize_tag(value);
        ExpenseType::ALL
            .into_iter()
            .find(|candidate| candidate.tag() == tag)
            .ok_or_else(|| ExpenseError::UnknownExpenseType(value.to_string()))
    }
}

impl FromStr for ExpenseSubType {
    type Err = ExpenseError;

    fn from_str(value: &str) -> Result<Self> {
        let tag = normalize_tag(value);
        ExpenseSubType::ALL
            .into_iter()
            .find(|candidate| candidate.tag() == tag)
            .ok_or_else(|| ExpenseError::UnknownExpenseSubType(value.to_string()))
    }
}
