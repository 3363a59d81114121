//! Per-step validators for the course metadata wizard.

use super::report::{derived, ensure, union, FieldErrors, Validation};
use crate::course::{BasicInfo, CourseMetadataDraft, Goals, Media, Pricing};
use crate::wizard::steps::MetadataStep;

/// Lowest price a paid course may be listed at.
pub const MIN_PRICE: f64 = 9.99;

/// Minimum number of non-blank learning objectives.
pub const MIN_LEARNING_OBJECTIVES: usize = 3;

pub fn validate_basic_info(info: &BasicInfo) -> Validation {
    union([
        derived(info),
        ensure(
            !info.title.trim().is_empty(),
            "title",
            "required",
            "Title is required",
        ),
        ensure(
            info.level.is_some(),
            "level",
            "required",
            "Select a course level",
        ),
        ensure(
            info.categories.iter().all(|c| !c.trim().is_empty()),
            "categories",
            "blank_entry",
            "Categories cannot be blank",
        ),
    ])
}

pub fn validate_media(media: &Media) -> Validation {
    derived(media)
}

/// Paid courses need `price >= MIN_PRICE`; a discount must undercut the price.
pub fn validate_pricing(pricing: &Pricing) -> Validation {
    if pricing.is_free {
        return Ok(());
    }

    let mut errors = FieldErrors::new();
    match pricing.price {
        None => errors.push("price", "required", "Price is required for paid courses"),
        Some(price) if !(price >= MIN_PRICE) => {
            errors.push("price", "min_price", "Minimum price is $9.99")
        }
        Some(_) => {}
    }

    if let Some(discount) = pricing.discount_price {
        if !(discount >= 0.0) {
            errors.push(
                "discount_price",
                "non_negative",
                "Discount price cannot be negative",
            );
        } else if let Some(price) = pricing.price {
            if discount >= price {
                errors.push(
                    "discount_price",
                    "below_price",
                    "Discount price must be less than the regular price",
                );
            }
        }
    }

    errors.into_validation()
}

pub fn validate_goals(goals: &Goals) -> Validation {
    let objectives = goals
        .learning_objectives
        .iter()
        .filter(|o| !o.trim().is_empty())
        .count();

    union([
        derived(goals),
        ensure(
            objectives >= MIN_LEARNING_OBJECTIVES,
            "learning_objectives",
            "min_items",
            "Add at least 3 learning objectives",
        ),
        ensure(
            goals.prerequisites.iter().all(|p| !p.trim().is_empty()),
            "prerequisites",
            "blank_entry",
            "Prerequisites cannot contain blank entries",
        ),
        ensure(
            goals.requirements.iter().all(|r| !r.trim().is_empty()),
            "requirements",
            "blank_entry",
            "Requirements cannot contain blank entries",
        ),
    ])
}

/// Run only the validator owned by `step`.
pub fn validate_metadata_step(step: MetadataStep, draft: &CourseMetadataDraft) -> Validation {
    match step {
        MetadataStep::BasicInfo => validate_basic_info(&draft.basic_info),
        MetadataStep::Media => validate_media(&draft.media),
        MetadataStep::Pricing => validate_pricing(&draft.pricing),
        MetadataStep::Goals => validate_goals(&draft.goals),
    }
}

/// Validate the entire metadata form.
pub fn validate_metadata(draft: &CourseMetadataDraft) -> Validation {
    union(
        MetadataStep::ALL
            .into_iter()
            .map(|step| validate_metadata_step(step, draft)),
    )
}
