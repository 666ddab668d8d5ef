// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Sentinel keyword and identifier constants used across the scanner and assembler.

pub(crate) const KW_NULL: &str = "null";
pub(crate) const KW_TRUE: &str = "true";
pub(crate) const KW_ON: &str = "on";
pub(crate) const KW_FALSE: &str = "false";
pub(crate) const KW_OFF: &str = "off";

/// Name of the implicit anonymous tag synthesized for value-only lines.
pub(crate) const CONTENT_TAG_NAME: &str = "content";

/// Wrapper tag name used by [`crate::parse::parse_values`].
pub(crate) const VALUES_WRAPPER_NAME: &str = "content";

/// Wrapper tag name used by [`crate::parse::parse_attributes`].
pub(crate) const ATTRIBUTES_WRAPPER_NAME: &str = "atts";
