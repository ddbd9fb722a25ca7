// SPDX-License-Identifier: GPL-3.0-or-later
pub(crate) mod color;
pub(crate) mod fit;
pub(crate) mod font;
