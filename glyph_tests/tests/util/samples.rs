// Copyright 2026 the Glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Ten characters on a single line.
pub(crate) const SINGLE_LINE: &str = "0123456789";

/// Short paragraphs, one of them empty, with a final newline.
pub(crate) const PARAGRAPHS: &str = "Line one.\nLine two.\n\nLine four is longer.\n";

/// A long paragraph that wraps many times at small widths.
pub(crate) const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Integer cursus interdum dui, in gravida ligula aliquam in. Vivamus vitae metus pharetra, ultricies metus quis, consectetur augue.";

/// Mixed paragraph lengths without a final newline.
pub(crate) const MIXED: &str = "Phasellus ac mauris et nisi pretium aliquet sed ac orci.\nUt mi ipsum.\n\nNunc vitae ornare leo. Aliquam turpis sem, varius eget neque vel.\nFusce metus mauris";

/// Every sample, for tests that sweep documents.
pub(crate) const ALL: [&str; 4] = [SINGLE_LINE, PARAGRAPHS, LOREM_IPSUM, MIXED];
