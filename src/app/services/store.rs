use crate::app::domain::form::{LabelRequest, MAX_UNITS};
use crate::app::domain::pickers::ColorPicker;
use crate::app::domain::record::{Category, HexColor, LabelGroup, LabelRecord};
use crate::app::error::{LabelError, Result};

/// Every label entered this session, in entry order.
///
/// `(order_name, category)` is unique across groups; a group's records are
/// always contiguous and share one color.
#[derive(Debug, Default)]
pub struct LabelStore {
    records: Vec<LabelRecord>,
}

impl LabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record per unit of `request`, colored with whatever the
    /// operator picks. Nothing is added if the key is taken or the picker is
    /// cancelled.
    pub fn add(
        &mut self,
        request: &LabelRequest,
        picker: &mut dyn ColorPicker,
    ) -> Result<HexColor> {
        if request.unit_total == 0 || request.order_name.trim().is_empty() {
            return Err(LabelError::Validation(
                "All fields must be filled in!".to_string(),
            ));
        }
        if request.unit_total > MAX_UNITS {
            return Err(LabelError::Validation(format!(
                "Number of HW Machines must be at most {MAX_UNITS}!"
            )));
        }
        if self.contains(&request.order_name, request.category) {
            return Err(LabelError::Duplicate {
                order_name: request.order_name.clone(),
                category: request.category,
            });
        }

        let color = picker
            .choose("Choose Label Color")
            .ok_or(LabelError::NoColorSelected)?;

        self.records.extend((1..=request.unit_total).map(|unit_index| {
            LabelRecord::new(
                request.order_name.clone(),
                unit_index,
                request.unit_total,
                request.category,
                color.clone(),
            )
        }));

        tracing::info!(
            order = %request.order_name,
            category = %request.category,
            units = request.unit_total,
            color = %color,
            "added labels"
        );
        Ok(color)
    }

    /// Recolor every record of a group. Returns how many records changed.
    pub fn set_color(&mut self, order_name: &str, category: Category, color: HexColor) -> usize {
        let mut updated = 0;
        for record in self.records.iter_mut().filter(|r| r.matches(order_name, category)) {
            record.set_color(color.clone());
            updated += 1;
        }
        if updated > 0 {
            tracing::debug!(order = %order_name, %category, %color, updated, "recolored labels");
        }
        updated
    }

    /// Ask the operator for a new color for an existing group. Cancelling
    /// leaves the group as it was and returns `None`.
    pub fn recolor(
        &mut self,
        order_name: &str,
        category: Category,
        picker: &mut dyn ColorPicker,
    ) -> Option<HexColor> {
        if !self.contains(order_name, category) {
            return None;
        }
        let title = format!("Choose a new color for {} {}", order_name, category);
        let color = picker.choose(&title)?;
        self.set_color(order_name, category, color.clone());
        Some(color)
    }

    pub fn clear(&mut self) {
        tracing::info!(removed = self.records.len(), "reset label data");
        self.records.clear();
    }

    pub fn all(&self) -> &[LabelRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, order_name: &str, category: Category) -> bool {
        self.records.iter().any(|r| r.matches(order_name, category))
    }

    /// One entry per form submission, in entry order.
    pub fn groups(&self) -> Vec<LabelGroup> {
        let mut groups: Vec<LabelGroup> = Vec::new();
        for record in &self.records {
            let known = groups
                .iter()
                .any(|g| g.order_name == record.order_name() && g.category == record.category());
            if !known {
                groups.push(LabelGroup {
                    order_name: record.order_name().to_string(),
                    category: record.category(),
                    color: record.color().clone(),
                    unit_total: record.unit_total(),
                });
            }
        }
        groups
    }
}
