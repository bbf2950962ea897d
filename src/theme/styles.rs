//! Global CSS styles for the link tree.
//!
//! Colors come from the palette custom properties in `colors.rs`; this sheet
//! only references them.

use linktree_core::motion;

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --teal: #14b8a6;
  --emerald: #10b981;

  --transition-fast: 200ms ease;
  --transition-normal: 300ms ease;
  --transition-theme: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  min-height: 100vh;
}

/* === Loading Surface === */
.page-loading {
  min-height: 100vh;
  background: transparent;
}

/* === Page === */
.page {
  position: relative;
  min-height: 100vh;
  width: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: var(--bg);
  color: var(--text-primary);
  transition: background-color var(--transition-theme), color var(--transition-theme);
  overflow: hidden;
}

@media (min-width: 640px) { .page { padding: 2rem; } }
@media (min-width: 768px) { .page { padding: 3rem; } }
@media (min-width: 1024px) { .page { padding: 4rem; } }

.page-column {
  position: relative;
  z-index: 10;
  width: 100%;
  max-width: 28rem;
  margin: 0 auto;
}

@media (min-width: 640px) { .page-column { max-width: 32rem; } }
@media (min-width: 768px) { .page-column { max-width: 36rem; } }
@media (min-width: 1024px) { .page-column { max-width: 42rem; } }

/* === Theme Toggle === */
.theme-toggle-wrap {
  position: absolute;
  top: 1rem;
  right: 1rem;
  z-index: 50;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.6rem;
  border: none;
  border-radius: 9999px;
  background: var(--surface);
  color: var(--text-primary);
  backdrop-filter: blur(4px);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  cursor: pointer;
  transition: all var(--transition-normal);
}

.icon-btn:hover {
  filter: brightness(1.1);
}

.toggle-glyph {
  display: inline-flex;
}

/* === Welcome + Profile === */
.welcome {
  text-align: center;
  margin-bottom: 2rem;
  font-size: 1.5rem;
  font-weight: 300;
  color: var(--text-secondary);
}

.brand {
  font-weight: 700;
  background: linear-gradient(to right, var(--teal), var(--emerald));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.profile {
  display: flex;
  flex-direction: column;
  align-items: center;
  margin-bottom: 2.5rem;
}

.avatar-ring {
  width: 7rem;
  height: 7rem;
  margin-bottom: 1.25rem;
  padding: 4px;
  border-radius: 9999px;
  background: linear-gradient(to bottom right, #2dd4bf, var(--emerald));
  box-shadow: 0 0 0 4px var(--ring);
  transition: transform var(--transition-normal);
}

.avatar-ring:hover { transform: scale(1.05) rotate(5deg); }
.avatar-ring:active { transform: scale(0.95); }

.avatar {
  width: 100%;
  height: 100%;
  border-radius: 9999px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--surface-solid, var(--bg));
  font-size: 2rem;
  font-weight: 700;
  color: var(--teal);
}

.profile-name {
  font-size: 2rem;
  font-weight: 700;
  margin-bottom: 0.5rem;
  color: var(--text-primary);
}

.profile-headline {
  max-width: 28rem;
  text-align: center;
  color: var(--text-secondary);
}

/* === Link Cards === */
.link-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.link-slot {
  transition: transform var(--transition-fast);
}

.link-slot:hover { transform: translateY(-4px) scale(1.03); }
.link-slot:active { transform: scale(0.97); }

.link-card {
  display: flex;
  align-items: center;
  padding: 1.1rem;
  border-radius: 0.75rem;
  border: 1px solid var(--surface-border);
  background: var(--surface);
  backdrop-filter: blur(4px);
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
  color: inherit;
  text-decoration: none;
  transition: box-shadow var(--transition-normal), border-color var(--transition-normal);
}

.link-card:hover {
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1);
}

.link-card.disabled {
  cursor: not-allowed;
}

.link-icon {
  margin-right: 1rem;
  padding: 0.65rem;
  border-radius: 0.5rem;
  color: #ffffff;
  display: inline-flex;
  transition: transform var(--transition-normal);
}

.link-card:hover .link-icon { transform: rotate(3deg); }

.link-text { flex: 1; }

.link-title {
  font-weight: 500;
  font-size: 1.125rem;
  color: var(--text-primary);
}

.link-description {
  margin-top: 0.25rem;
  font-size: 0.875rem;
  color: var(--text-muted);
}

.link-trailing {
  display: inline-flex;
  transition: transform var(--transition-fast);
}

.link-card:hover .link-trailing { transform: translateX(3px); }

.external-glyph {
  color: var(--text-muted);
  transition: color var(--transition-normal);
}

.link-card:hover .external-glyph { color: var(--text-secondary); }

.soon-badge {
  font-size: 0.75rem;
  font-weight: 500;
  padding: 0.25rem 0.5rem;
  border-radius: 9999px;
  background: var(--badge-bg);
  color: var(--text-muted);
}

/* === Footer === */
.footer {
  margin-top: 4rem;
  text-align: center;
  color: var(--text-muted);
}

.footer-note {
  margin-top: 0.25rem;
  font-size: 0.875rem;
}

/* === Backdrop === */
.backdrop {
  position: fixed;
  inset: 0;
  z-index: 0;
  overflow: hidden;
  pointer-events: none;
}

.backdrop-wash {
  position: absolute;
  inset: 0;
  background: linear-gradient(to bottom right, transparent, var(--wash));
  opacity: 0.4;
}

.backdrop-grid {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  opacity: var(--decor-opacity);
  color: var(--grid-line);
}

.node {
  position: absolute;
  border-radius: 9999px;
  opacity: 0.25;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  animation: drift-20 var(--period) ease-in-out infinite alternate;
}

.node-teal { background: linear-gradient(to right, var(--node-teal)); }
.node-purple { background: linear-gradient(to right, var(--node-purple)); }

.orb {
  position: absolute;
  border-radius: 9999px;
  filter: blur(64px);
  opacity: 0.15;
}

.orb-purple {
  top: 25%;
  left: 25%;
  width: 24rem;
  height: 24rem;
  background: linear-gradient(to right, var(--orb-purple));
}

.orb-blue {
  bottom: 33%;
  right: 25%;
  width: 40rem;
  height: 40rem;
  background: linear-gradient(to right, var(--orb-blue));
}

.connection-line {
  position: absolute;
  height: 1px;
  transform-origin: left center;
  background: linear-gradient(to right, var(--line));
  animation: line-pulse var(--period) ease-in-out infinite alternate;
}

.terminal-decor, .hash-decor {
  position: absolute;
  overflow: hidden;
  font-family: var(--font-mono);
  opacity: var(--decor-opacity);
  color: var(--text-secondary);
}

.terminal-decor {
  bottom: 0;
  left: 0;
  width: 100%;
  height: 33%;
  font-size: 0.875rem;
}

.terminal-decor .ok { color: var(--terminal-ok); }
.terminal-decor div { margin: 0.25rem 0 0 1rem; }

.hash-decor {
  top: 0;
  right: 0;
  width: 33%;
  height: 33%;
  font-size: 0.75rem;
  text-align: right;
}

.hash-decor div { margin: 0.25rem 1rem 0 0; }

.rise-in { animation: rise-in 2s ease-out 1s both; }
.fall-in { animation: fall-in 2s ease-out 1.5s both; }

.floating-glyph {
  position: absolute;
  opacity: 0.1;
  color: var(--glyph);
  animation: bob var(--period) ease-in-out infinite alternate;
}

/* === Entrance Animations === */
.fade-in { animation: fade-in 0.6s ease both; }
.drop-in { animation: drop-in 0.7s ease-out both; }
.drop-in.delayed { animation-delay: 0.2s; }
.lift-in { animation: lift-in 0.7s ease-out 0.2s both; }
.footer-in { animation: fade-in 0.7s ease 0.8s both; }
.enter-left { animation: enter-left 0.5s cubic-bezier(0.34, 1.3, 0.64, 1) both; }
.spin-in-left { animation: spin-in-left 0.5s ease both; }
.spin-in-right { animation: spin-in-right 0.5s ease both; }

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes drop-in {
  from { opacity: 0; transform: translateY(-20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes lift-in {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes enter-left {
  from { opacity: 0; transform: translateX(-50px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes spin-in-left {
  from { opacity: 0; transform: rotate(-30deg); }
  to { opacity: 1; transform: rotate(0); }
}

@keyframes spin-in-right {
  from { opacity: 0; transform: rotate(30deg); }
  to { opacity: 1; transform: rotate(0); }
}

@keyframes rise-in {
  from { transform: translateY(100px); }
  to { transform: translateY(0); }
}

@keyframes fall-in {
  from { transform: translateY(-100px); }
  to { transform: translateY(0); }
}

@keyframes line-pulse {
  0% { opacity: 0.1; width: var(--w0); }
  50% { opacity: 0.2; width: var(--w1); }
  100% { opacity: 0.1; width: var(--w0); }
}

@keyframes bob {
  0% { transform: translateY(0) rotate(0deg); }
  25% { transform: translateY(10px) rotate(10deg); }
  50% { transform: translateY(20px) rotate(0deg); }
  75% { transform: translateY(10px) rotate(-10deg); }
  100% { transform: translateY(0) rotate(0deg); }
}

@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
  }
}
"#;

/// Square-path drift: right/up, back, left/down, back.
pub fn drift_keyframes(name: &str, px: i32) -> String {
    format!(
        "@keyframes {name} {{\n  \
           0% {{ transform: translate(0, 0); }}\n  \
           25% {{ transform: translate({px}px, {neg}px); }}\n  \
           50% {{ transform: translate(0, 0); }}\n  \
           75% {{ transform: translate({neg}px, {px}px); }}\n  \
           100% {{ transform: translate(0, 0); }}\n}}\n",
        name = name,
        px = px,
        neg = -px,
    )
}

/// Drift keyframes for the backdrop nodes and each orb in
/// [`motion::orbs`].
pub fn motion_styles() -> String {
    let node_drift = motion::NODE_DRIFT_PX;
    let mut css = drift_keyframes(&motion::drift_animation_name(node_drift), node_drift);
    for orb in motion::orbs() {
        css.push_str(&drift_keyframes(&orb.animation_name(), orb.drift_px));
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drift_keyframes_mirror_offsets() {
        let css = drift_keyframes("drift-20", 20);
        assert!(css.starts_with("@keyframes drift-20 {"));
        assert!(css.contains("25% { transform: translate(20px, -20px); }"));
        assert!(css.contains("75% { transform: translate(-20px, 20px); }"));
    }

    #[test]
    fn reverse_drift_flips_direction() {
        let css = motion_styles();
        assert!(css.contains("@keyframes drift-40-reverse {"));
        assert!(css.contains("translate(-40px, 40px)"));
    }

    #[test]
    fn every_orb_gets_keyframes() {
        let css = motion_styles();
        for orb in motion::orbs() {
            assert!(css.contains(&format!("@keyframes {} {{", orb.animation_name())));
        }
    }

    #[test]
    fn node_animation_has_keyframes() {
        let name = motion::drift_animation_name(motion::NODE_DRIFT_PX);
        assert!(GLOBAL_STYLES.contains(&format!("animation: {} var(--period)", name)));
        assert!(motion_styles().starts_with(&format!("@keyframes {} {{", name)));
    }

    #[test]
    fn orb_animations_are_not_hard_coded() {
        assert!(!GLOBAL_STYLES.contains("drift-30"));
        assert!(!GLOBAL_STYLES.contains("drift-40"));
    }
}
