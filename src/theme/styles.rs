//! Global CSS styles for the card gallery.
//!
//! Light paper look: white desk, soft card shadows, category colors on the
//! tag badges. Card size and the reserved top strip arrive as CSS variables
//! set by the board.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --desk: #ffffff;
  --desk-shade: #f9fafb;
  --line: #111111;
  --line-soft: #e5e7eb;

  /* Text */
  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #9ca3af;

  /* Accent */
  --accent: #3b82f6;
  --accent-strong: #2563eb;
  --accent-soft: rgba(59, 130, 246, 0.12);

  /* Overlay */
  --backdrop: rgba(0, 0, 0, 0.92);

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 1.875rem;

  /* Layout */
  --header-height: 88px;
  --radius: 8px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-curtain: 500ms ease-in-out;
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
}

body {
  font-family: var(--font-sans);
  background: var(--desk);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

.visually-hidden {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0 0 0 0);
  white-space: nowrap;
}

/* === Header === */
.app-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--header-height);
  margin: 0 1rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  background: var(--desk);
  border-bottom: 1px solid var(--line);
  z-index: 10000;
}

.app-title {
  font-size: var(--text-2xl);
  font-weight: 500;
  color: var(--text-primary);
}

.app-header__actions {
  display: flex;
  gap: 0.75rem;
}

/* === Buttons === */
.btn-primary,
.btn-ghost {
  font: inherit;
  font-size: var(--text-sm);
  padding: 0.5rem 1rem;
  border-radius: 4px;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  color: #ffffff;
  border: none;
}

.btn-primary:hover {
  background: var(--accent-strong);
}

.btn-ghost {
  background: transparent;
  color: var(--text-secondary);
  border: 1px solid var(--line-soft);
}

.btn-ghost:hover {
  color: var(--text-primary);
  border-color: var(--text-muted);
}

.btn-primary:disabled,
.btn-ghost:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.25rem;
  height: 2.25rem;
  border: none;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.5);
  color: var(--text-primary);
  font-size: var(--text-xl);
  line-height: 1;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.icon-btn:hover {
  background: rgba(255, 255, 255, 0.75);
}

.close-btn {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  z-index: 1;
}

/* === Filter Bar === */
.filter-bar {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.filter-bar__row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  flex-wrap: wrap;
}

.category-pills {
  display: flex;
  gap: 0.5rem;
}

.pill {
  font: inherit;
  font-size: var(--text-sm);
  padding: 0.35rem 0.9rem;
  border-radius: 999px;
  border: 1px solid var(--line-soft);
  background: var(--desk);
  color: var(--text-secondary);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.pill:hover {
  border-color: var(--text-muted);
}

.pill.has-active {
  border-color: var(--accent);
  color: var(--accent-strong);
}

.pill.expanded {
  background: var(--text-primary);
  border-color: var(--text-primary);
  color: var(--desk);
}

.pill__count {
  margin-left: 0.4rem;
  font-size: var(--text-xs);
  padding: 0 0.4rem;
  border-radius: 999px;
  background: var(--accent-soft);
}

.tag-checklist {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem 1rem;
  padding: 0.5rem 0.75rem;
  background: var(--desk-shade);
  border-radius: var(--radius);
}

.tag-check {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
  cursor: pointer;
}

.tag-check__dot {
  width: 0.8rem;
  height: 0.8rem;
  border-radius: 50%;
  border: 1px solid var(--text-muted);
  transition: background var(--transition-fast);
}

.tag-check.checked {
  color: var(--text-primary);
}

.tag-check.checked .tag-check__dot {
  background: var(--accent);
  border-color: var(--accent);
}

/* === Tag Badges === */
.tag-badges {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
}

.tag-badge {
  padding: 0.2rem 0.5rem;
  border-radius: 4px;
  font-size: var(--text-sm);
  color: #ffffff;
}

.tag-badge--small {
  padding: 0.1rem 0.4rem;
  font-size: var(--text-xs);
}

/* === Gallery Page === */
.gallery-main {
  padding-top: var(--header-height);
}

.board-wrap {
  position: relative;
}

.board-toolbar {
  position: absolute;
  top: 0;
  left: 0;
  right: 0;
  min-height: var(--reserved-top, 96px);
  padding: 1rem;
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 1rem;
  z-index: 9000;
  pointer-events: none;
}

.board-toolbar > * {
  pointer-events: auto;
}

.board-toolbar__summary {
  font-size: var(--text-sm);
  color: var(--text-muted);
  white-space: nowrap;
}

/* === Card Board === */
.card-board {
  position: relative;
  width: 100%;
  min-height: 20rem;
  user-select: none;
}

.card-board--interactive {
  height: calc(100vh - var(--header-height));
  overflow: hidden;
}

.board-empty {
  position: absolute;
  top: 40%;
  left: 50%;
  transform: translate(-50%, -50%);
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  color: var(--text-secondary);
}

/* === Card Tile === */
.card-tile {
  position: absolute;
  top: 0;
  left: 0;
  width: var(--card-w, 200px);
  height: var(--card-h, 280px);
  cursor: pointer;
  transition: transform var(--transition-normal);
}

.card-board--interactive .card-tile {
  cursor: grab;
}

.card-tile.dragging {
  cursor: grabbing;
  transition: none;
}

.card-tile__frame {
  width: 100%;
  height: 100%;
  display: flex;
  flex-direction: column;
  background: var(--desk);
  border-radius: var(--radius);
  overflow: hidden;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1), 0 2px 4px rgba(0, 0, 0, 0.06);
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.card-tile:hover .card-tile__frame {
  transform: rotate(var(--tilt, 0deg)) scale(1.02);
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.12), 0 4px 6px rgba(0, 0, 0, 0.08);
}

.card-tile.dragging .card-tile__frame {
  transform: scale(1.04);
  box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
}

.card-tile__image {
  width: 100%;
  height: 65%;
  object-fit: cover;
  background: var(--desk-shade);
  pointer-events: none;
}

.card-tile__body {
  padding: 0.6rem 0.75rem;
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.card-tile__name {
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--text-primary);
}

/* === Popup === */
.popup-backdrop {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: var(--backdrop);
  z-index: 20000;
  animation: fade-in var(--transition-normal);
}

.popup {
  position: relative;
  width: 100%;
  max-width: 28rem;
  background: var(--desk);
  border-radius: var(--radius);
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
  overflow: hidden;
}

.popup__image {
  width: 100%;
  height: 16rem;
  object-fit: cover;
  background: var(--desk-shade);
}

.popup__body {
  padding: 1.5rem;
}

.popup__name {
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--text-primary);
}

.popup__alt {
  margin-bottom: 0.75rem;
  color: var(--text-muted);
}

.popup__meta {
  margin-bottom: 0.75rem;
  color: var(--text-secondary);
}

.popup__section {
  margin: 0.5rem 0;
  font-size: var(--text-lg);
  font-weight: 600;
}

.popup-nav {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
}

.popup-nav--prev {
  left: 1rem;
}

.popup-nav--next {
  right: 1rem;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* === Loading === */
.loading {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  min-height: 60vh;
  color: var(--text-muted);
}

.loading__spinner {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  border: 3px solid var(--line-soft);
  border-top-color: var(--accent);
  animation: spin 900ms linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Dashboard === */
.dashboard {
  position: fixed;
  inset: 0;
  overflow: auto;
  background: var(--desk);
  z-index: 30;
}

.curtain-down {
  animation: curtain-down var(--transition-curtain);
}

@keyframes curtain-down {
  from { transform: translateY(-100%); }
  to { transform: translateY(0); }
}

.dashboard__inner {
  max-width: 80rem;
  margin: 0 auto;
  padding: 2rem 1rem 4rem;
}

.dashboard__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1.5rem;
}

.dashboard__title {
  font-size: var(--text-2xl);
  font-weight: 700;
}

.dashboard__section {
  margin-bottom: 2.5rem;
}

.dashboard__section h2 {
  margin-bottom: 1rem;
  font-size: var(--text-xl);
  font-weight: 600;
}

.top-tags {
  display: flex;
  justify-content: space-around;
}

.top-tags__item {
  text-align: center;
}

.top-tags__rank {
  font-size: 2.25rem;
  font-weight: 700;
}

.top-tags__tag {
  font-size: var(--text-lg);
}

.top-tags__count {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

/* === Charts === */
.bar-chart {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.bar-chart__row {
  display: grid;
  grid-template-columns: 8rem 1fr 2.5rem;
  align-items: center;
  gap: 0.75rem;
}

.bar-chart__label {
  font-size: var(--text-sm);
  color: var(--text-secondary);
  text-align: right;
}

.bar-chart__track {
  height: 1.25rem;
  background: var(--desk-shade);
  border-radius: 4px;
  overflow: hidden;
}

.bar-chart__bar {
  height: 100%;
  border-radius: 4px;
  transition: width var(--transition-normal);
}

.bar-chart__count {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.pie-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
  gap: 2rem;
}

.pie-card {
  padding: 1rem;
  border-radius: var(--radius);
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
  display: flex;
  flex-direction: column;
  align-items: center;
}

.pie-card__title {
  align-self: flex-start;
  margin-bottom: 0.5rem;
  font-size: var(--text-lg);
  font-weight: 600;
}

.pie-chart__label {
  font-size: var(--text-xs);
  font-weight: 600;
  fill: #ffffff;
  pointer-events: none;
}

.pie-chart__placeholder {
  font-size: var(--text-sm);
  fill: var(--text-muted);
}

.pie-legend {
  list-style: none;
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.25rem 0.75rem;
  margin-top: 0.5rem;
  font-size: var(--text-xs);
  color: var(--text-secondary);
}

.pie-legend__swatch {
  display: inline-block;
  width: 0.6rem;
  height: 0.6rem;
  margin-right: 0.3rem;
  border-radius: 2px;
}

/* === Card List === */
.card-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  margin-top: 1rem;
}

.card-list__item {
  padding: 1rem;
  border-radius: 4px;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
  cursor: pointer;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.card-list__item:hover {
  background: var(--desk-shade);
}

.card-list__name {
  font-weight: 600;
}

.card-list__empty {
  margin-top: 1rem;
  color: var(--text-muted);
}
"#;
