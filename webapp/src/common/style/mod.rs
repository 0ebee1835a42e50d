use constcat::concat;

mod components;
mod modal;
mod variables;

pub use components::BASE_COMPONENTS;
pub use modal::MODAL_STYLES;
pub use variables::CSS_VARIABLES;

pub const DASHBOARD_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    MODAL_STYLES,
    r#"
/* Application-specific styles */
.app-header {
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-4);
  max-width: var(--container-width);
  margin: 0 auto;
}

.logo {
  font-weight: 600;
  font-size: 1.125rem;
}

.nav-links {
  display: flex;
  gap: var(--space-4);
}

.nav-link {
  color: var(--text-secondary);
  padding: var(--space-2);
}

.nav-link.active {
  color: var(--primary);
  border-bottom: 2px solid var(--primary);
}

.page {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-6) var(--space-4);
}

.page-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: var(--space-4);
}

.page-title {
  font-size: 1.5rem;
  font-weight: 600;
}

.search-form {
  display: flex;
  gap: var(--space-2);
  margin-bottom: var(--space-4);
}

.stat-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: var(--space-4);
}

.stat-card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  padding: var(--space-4);
  box-shadow: var(--shadow-sm);
}

.stat-value {
  font-size: 2rem;
  font-weight: 700;
}

.stat-label {
  color: var(--text-secondary);
}

.section {
  margin-top: var(--space-8);
}

.section-title {
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: var(--space-3);
}
"#
);
