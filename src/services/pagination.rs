// src/services/pagination.rs

use crate::error::{AppError, AppResult};

pub const MAX_PAGE_SIZE: i64 = 100;

/// Zero-based page request as it arrives from a client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Self {
        Self { page, size }
    }

    /// Checked before any store access
    pub fn validate(&self) -> AppResult<()> {
        if self.page < 0 {
            return Err(AppError::invalid_input(
                "Invalid page parameters: page number can't be < 0",
            ));
        }
        if self.size > MAX_PAGE_SIZE {
            return Err(AppError::invalid_input(
                "Invalid pagination parameters: page size must be <= 100",
            ));
        }
        if self.size < 1 {
            return Err(AppError::invalid_input(
                "Invalid pagination parameters: Page size must be 1 to 100",
            ));
        }
        Ok(())
    }

    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}
