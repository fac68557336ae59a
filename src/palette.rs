use macroquad::color::Color;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Normal,
    Colorblind,
}

impl ColorMode {
    pub fn palette(self) -> &'static Palette {
        match self {
            ColorMode::Normal => &NORMAL,
            ColorMode::Colorblind => &COLORBLIND,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Normal => ColorMode::Colorblind,
            ColorMode::Colorblind => ColorMode::Normal,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub head: Color,
    pub body: Color,
    pub border: Color,
    pub food: Color,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
}

// Sage board, olive snake, orange food
static NORMAL: Palette = Palette {
    background: rgb(0xac, 0xec, 0xdf),
    head: rgb(0x64, 0x7d, 0x34),
    body: rgb(0xc0, 0xc7, 0x41),
    border: rgb(0xf5, 0xed, 0xba),
    food: rgb(0xe4, 0x94, 0x3a),
};

// High contrast greys; food is told apart by its white border
static COLORBLIND: Palette = Palette {
    background: rgb(0x00, 0x00, 0x00),
    head: rgb(0xee, 0xee, 0xee),
    body: rgb(0xa9, 0xa9, 0xa9),
    border: rgb(0xff, 0xff, 0xff),
    food: rgb(0x00, 0x00, 0x00),
};
