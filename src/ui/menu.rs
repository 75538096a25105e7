//! 모바일 메뉴 토글

/// 햄버거 아이콘 path
pub const HAMBURGER_ICON_PATH: &str = "M4 6h16M4 12h16M4 18h16";
/// 닫기 아이콘 path
pub const CLOSE_ICON_PATH: &str = "M6 18L18 6M6 6l12 12";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileMenu {
    hidden: bool,
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self { hidden: true }
    }
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// 현재 상태에 맞는 아이콘 path
    pub fn icon_path(&self) -> &'static str {
        if self.hidden {
            HAMBURGER_ICON_PATH
        } else {
            CLOSE_ICON_PATH
        }
    }

    /// 열림/닫힘 전환 후 아이콘 path 반환
    pub fn toggle(&mut self) -> &'static str {
        self.hidden = !self.hidden;
        self.icon_path()
    }

    /// 아이콘 svg 내부 마크업
    pub fn icon_markup(&self) -> String {
        format!(
            r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="{}" />"#,
            self.icon_path()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_swaps_icon() {
        let mut menu = MobileMenu::new();
        assert!(menu.is_hidden());
        assert_eq!(menu.toggle(), CLOSE_ICON_PATH);
        assert!(!menu.is_hidden());
        assert_eq!(menu.toggle(), HAMBURGER_ICON_PATH);
        assert!(menu.icon_markup().contains(HAMBURGER_ICON_PATH));
    }
}
