//! Shared CSS for glass cards.
//!
//! Only layout and typography live here. Glass paint (tint, blur, borders,
//! shadows, hover lift) is emitted inline from the resolved style.

pub const GLASS_STYLES: &str = r#"
.glass-card {
  position: relative;
  box-sizing: border-box;
  display: flex;
  flex-direction: column;
  gap: 12px;
  padding: 20px;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  overflow: hidden;
}

.glass-card--interactive {
  cursor: pointer;
}

.glass-card--interactive:focus-visible {
  outline: 2px solid currentColor;
  outline-offset: 3px;
}

.glass-card__progress {
  height: 4px;
  border-radius: 2px;
  background: rgba(255, 255, 255, 0.25);
  overflow: hidden;
}

.glass-card__progress-fill {
  height: 100%;
  background: currentColor;
  transition: width 300ms ease;
}

.player-card__row {
  display: flex;
  align-items: center;
  gap: 16px;
}

.player-card__toggle {
  font-size: 1.5rem;
  width: 2rem;
  text-align: center;
}

.player-card__track,
.icon-card__text {
  display: flex;
  flex-direction: column;
}

.player-card__title,
.icon-card__title,
.trip-card__destination {
  font-weight: 600;
  margin: 0;
}

.player-card__artist,
.icon-card__subtitle,
.trip-card__line {
  opacity: 0.75;
  margin: 0;
}

.player-card__seek {
  width: 100%;
}

.icon-card {
  flex-direction: row;
  align-items: center;
}

.icon-card__icon {
  font-size: 2rem;
}

.frosted-card--nav {
  flex-direction: row;
  align-items: center;
  padding: 0 20px;
}

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  padding: 0;
  margin: -1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
  border: 0;
}
"#;
