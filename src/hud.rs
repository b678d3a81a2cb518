//! Text widgets next to the canvas: current ball speed and paddle size

/// Two addressable text regions, updated imperatively
pub trait Hud {
    fn set_ball_speed(&mut self, text: &str);
    fn set_paddle_size(&mut self, text: &str);
}

pub fn ball_speed_label(speed: f32) -> String {
    format!("Ball speed: {:.2}", speed)
}

pub fn paddle_size_label(width: u32) -> String {
    format!("Paddle size: {}", width)
}

/// Keeps the last text written to each region
#[derive(Debug, Clone, Default)]
pub struct TextHud {
    pub ball_speed: String,
    pub paddle_size: String,
}

impl Hud for TextHud {
    fn set_ball_speed(&mut self, text: &str) {
        self.ball_speed = text.to_string();
    }

    fn set_paddle_size(&mut self, text: &str) {
        self.paddle_size = text.to_string();
    }
}

/// DOM-backed HUD (browser only)
#[cfg(target_arch = "wasm32")]
pub struct DomHud {
    ball_speed: Option<web_sys::Element>,
    paddle_size: Option<web_sys::Element>,
}

#[cfg(target_arch = "wasm32")]
impl DomHud {
    pub const BALL_SPEED_ID: &'static str = "ballSpeed";
    pub const PADDLE_SIZE_ID: &'static str = "paddleSize";

    pub fn new(document: &web_sys::Document) -> Self {
        let find = |id: &str| {
            let el = document.get_element_by_id(id);
            if el.is_none() {
                log::warn!("HUD element #{} missing", id);
            }
            el
        };
        Self {
            ball_speed: find(Self::BALL_SPEED_ID),
            paddle_size: find(Self::PADDLE_SIZE_ID),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Hud for DomHud {
    fn set_ball_speed(&mut self, text: &str) {
        if let Some(el) = &self.ball_speed {
            el.set_text_content(Some(text));
        }
    }

    fn set_paddle_size(&mut self, text: &str) {
        if let Some(el) = &self.paddle_size {
            el.set_text_content(Some(text));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(ball_speed_label(2.828427), "Ball speed: 2.83");
        assert_eq!(ball_speed_label(3.0), "Ball speed: 3.00");
        assert_eq!(paddle_size_label(195), "Paddle size: 195");
    }

    #[test]
    fn test_text_hud_keeps_last_write() {
        let mut hud = TextHud::default();
        hud.set_ball_speed("Ball speed: 2.83");
        hud.set_ball_speed("Ball speed: 2.97");
        hud.set_paddle_size("Paddle size: 195");
        assert_eq!(hud.ball_speed, "Ball speed: 2.97");
        assert_eq!(hud.paddle_size, "Paddle size: 195");
    }
}
