//! Global CSS styles for Nusantara.
//!
//! Colors come from [`super::colors`] as CSS custom properties; everything
//! else is static.

use super::colors;

/// `:root` block declaring the color, shape and type tokens
pub fn theme_variables() -> String {
    format!(
        ":root {{
  --color-background: {background};
  --color-surface: {surface};
  --color-surface-variant: {surface_variant};
  --color-outline: {outline};
  --color-primary: {primary};
  --color-on-primary: {on_primary};
  --color-secondary-container: {secondary_container};
  --color-on-surface: {on_surface};
  --color-on-surface-variant: {on_surface_variant};

  --shape-small: 8px;
  --shape-medium: 12px;
  --shape-full: 9999px;

  --font-sans: 'Roboto', 'Inter', 'Segoe UI', system-ui, sans-serif;
}}
",
        background = colors::BACKGROUND,
        surface = colors::SURFACE,
        surface_variant = colors::SURFACE_VARIANT,
        outline = colors::OUTLINE,
        primary = colors::PRIMARY,
        on_primary = colors::ON_PRIMARY,
        secondary_container = colors::SECONDARY_CONTAINER,
        on_surface = colors::ON_SURFACE,
        on_surface_variant = colors::ON_SURFACE_VARIANT,
    )
}

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
}

body {
  font-family: var(--font-sans);
  background: var(--color-background);
  color: var(--color-on-surface);
  -webkit-font-smoothing: antialiased;
}

#main {
  height: 100%;
}

/* === Typography === */
.text-title-medium {
  font-size: 16px;
  font-weight: 500;
  letter-spacing: 0.15px;
}

.text-body-medium {
  font-size: 14px;
  font-weight: 400;
  letter-spacing: 0.25px;
}

.text-label-medium {
  font-size: 12px;
  font-weight: 500;
  letter-spacing: 0.5px;
}

.section-title,
.align-body__caption,
.collection-card__label {
  display: block;
  white-space: nowrap;
}

/* === Screen Layout === */
.main-screen {
  display: flex;
  flex-direction: column;
  height: 100vh;
}

.main-screen__body {
  display: flex;
  flex-direction: row;
  flex: 1;
  min-height: 0;
}

.content-screen {
  display: flex;
  flex-direction: column;
  flex: 1;
  min-width: 0;
  overflow-y: auto;
}

.spacer {
  flex-shrink: 0;
}

/* === Search Field === */
.search-field {
  display: flex;
  align-items: center;
  gap: 16px;
  padding: 0 16px;
  background: var(--color-surface-variant);
  border-radius: var(--shape-small) var(--shape-small) 0 0;
  border-bottom: 1px solid var(--color-on-surface-variant);
  color: var(--color-on-surface-variant);
  cursor: text;
}

.search-field:focus-within {
  border-bottom: 2px solid var(--color-primary);
}

.search-field__icon {
  display: flex;
}

.search-field__input {
  flex: 1;
  min-width: 0;
  border: none;
  outline: none;
  background: transparent;
  color: var(--color-on-surface);
  font-family: inherit;
}

.search-field__input::placeholder {
  color: var(--color-on-surface-variant);
}

/* === Horizontal Collections === */
.align-body-row,
.card-grid {
  display: flex;
  flex-direction: row;
  overflow-x: auto;
  overflow-y: hidden;
  scrollbar-width: none;
}

.align-body-row::-webkit-scrollbar,
.card-grid::-webkit-scrollbar {
  display: none;
}

.align-body {
  display: flex;
  flex-direction: column;
  align-items: center;
  flex-shrink: 0;
  content-visibility: auto;
}

.card-grid__column {
  display: flex;
  flex-direction: column;
  flex-shrink: 0;
}

.collection-card {
  display: flex;
  flex-direction: row;
  align-items: center;
  overflow: hidden;
  flex-shrink: 0;
  content-visibility: auto;
}

.cropped-image.empty {
  background: var(--color-outline);
  opacity: 0.2;
}

/* === Navigation === */
.bottom-nav {
  display: flex;
  flex-direction: row;
  justify-content: space-around;
  height: 80px;
  padding: 12px 0 16px;
}

.nav-rail {
  display: flex;
  flex-direction: column;
  justify-content: center;
  width: 80px;
  flex-shrink: 0;
}

.nav-rail__items {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 12px;
}

.nav-item {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 4px;
  border: none;
  background: transparent;
  color: var(--color-on-surface-variant);
  cursor: pointer;
}

.nav-item--bar {
  flex: 1;
}

.nav-item__indicator {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 64px;
  height: 32px;
  border-radius: var(--shape-full);
}

.nav-item--rail .nav-item__indicator {
  width: 56px;
}

.nav-item.selected {
  color: var(--color-on-surface);
}

.nav-item.selected .nav-item__indicator {
  background: var(--color-secondary-container);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_variables_declare_slots() {
        let css = theme_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains(&format!("--color-surface-variant: {};", colors::SURFACE_VARIANT)));
        assert!(css.contains("--shape-medium: 12px;"));
    }

    #[test]
    fn test_global_styles_cover_text_slots() {
        for class in [".text-title-medium", ".text-body-medium", ".text-label-medium"] {
            assert!(GLOBAL_STYLES.contains(class), "missing {class}");
        }
    }
}
