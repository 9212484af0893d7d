//! Text state tracked while walking a page content stream.
//!
//! Covers the subset of the PDF text machinery the fragment source needs:
//! the text and line matrices, font size, character spacing, horizontal
//! scaling, and leading. Rendering-only parameters (rise, render mode,
//! word spacing per code 32) are not tracked.

/// A 2D affine transform in PDF row-vector form `[a b c d e f]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Matrix {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Matrix product `self × other` (row-vector convention: `self` applies
    /// first).
    pub fn concat(&self, other: &Matrix) -> Matrix {
        Matrix {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    /// The point this matrix maps the text-space origin to.
    pub fn origin(&self) -> (f64, f64) {
        (self.e, self.f)
    }

    /// Magnitude of the horizontal basis vector — scales text-space
    /// advances into page space.
    pub fn x_scale(&self) -> f64 {
        (self.a * self.a + self.c * self.c).sqrt()
    }

    /// Magnitude of the vertical basis vector — scales the font size into
    /// page space.
    pub fn y_scale(&self) -> f64 {
        (self.b * self.b + self.d * self.d).sqrt()
    }
}

/// Mutable text state for one page's content stream.
#[derive(Debug, Clone)]
pub struct TextState {
    /// Current font size set by `Tf`.
    pub font_size: f64,
    /// Current font resource name set by `Tf` (e.g. "F1").
    pub font_name: String,
    /// Character spacing (`Tc`), added after each glyph.
    pub char_spacing: f64,
    /// Horizontal scaling (`Tz`) as a percentage, 100 = normal.
    pub h_scaling: f64,
    /// Text leading (`TL`), baseline-to-baseline distance.
    pub leading: f64,
    /// Whether we are inside a BT/ET text object.
    in_text_object: bool,
    text_matrix: Matrix,
    line_matrix: Matrix,
}

impl Default for TextState {
    fn default() -> Self {
        Self::new()
    }
}

impl TextState {
    pub fn new() -> Self {
        Self {
            font_size: 0.0,
            font_name: String::new(),
            char_spacing: 0.0,
            h_scaling: 100.0,
            leading: 0.0,
            in_text_object: false,
            text_matrix: Matrix::identity(),
            line_matrix: Matrix::identity(),
        }
    }

    pub fn in_text_object(&self) -> bool {
        self.in_text_object
    }

    pub fn text_matrix(&self) -> &Matrix {
        &self.text_matrix
    }

    /// `BT`: begin text object, resetting both matrices to identity.
    pub fn begin_text(&mut self) {
        self.text_matrix = Matrix::identity();
        self.line_matrix = Matrix::identity();
        self.in_text_object = true;
    }

    /// `ET`: end text object.
    pub fn end_text(&mut self) {
        self.in_text_object = false;
    }

    /// `Tf`: set font name and size.
    pub fn set_font(&mut self, name: String, size: f64) {
        self.font_name = name;
        self.font_size = size;
    }

    /// `Tm`: replace the text and line matrices.
    pub fn set_text_matrix(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        let m = Matrix::new(a, b, c, d, e, f);
        self.text_matrix = m;
        self.line_matrix = m;
    }

    /// `Td`: move to the start of the next line, offset from the current
    /// line start.
    pub fn move_text_position(&mut self, tx: f64, ty: f64) {
        let translation = Matrix::new(1.0, 0.0, 0.0, 1.0, tx, ty);
        self.line_matrix = translation.concat(&self.line_matrix);
        self.text_matrix = self.line_matrix;
    }

    /// `TD`: `Td` that also sets leading to `-ty`.
    pub fn move_text_position_and_set_leading(&mut self, tx: f64, ty: f64) {
        self.leading = -ty;
        self.move_text_position(tx, ty);
    }

    /// `T*`: move to the start of the next line using the current leading.
    pub fn move_to_next_line(&mut self) {
        let leading = self.leading;
        self.move_text_position(0.0, -leading);
    }

    /// Advance the text matrix horizontally by `tx` text-space units after
    /// showing text.
    pub fn advance_text_position(&mut self, tx: f64) {
        let translation = Matrix::new(1.0, 0.0, 0.0, 1.0, tx, 0.0);
        self.text_matrix = translation.concat(&self.text_matrix);
    }

    /// Effective font size in page space, accounting for the text matrix's
    /// vertical scale.
    pub fn effective_font_size(&self) -> f64 {
        let scale = self.text_matrix.y_scale();
        if scale > 0.0 {
            self.font_size * scale
        } else {
            self.font_size
        }
    }
}
