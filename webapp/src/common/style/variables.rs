pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #0F766E;          /* teal, the dashboard brand color */
  --primary-light: #14B8A6;
  --primary-dark: #115E59;

  /* Neutrals */
  --neutral-50: #F8FAFC;
  --neutral-100: #F1F5F9;
  --neutral-200: #E2E8F0;
  --neutral-300: #CBD5E1;
  --neutral-400: #94A3B8;
  --neutral-500: #64748B;
  --neutral-600: #475569;
  --neutral-700: #334155;
  --neutral-800: #1E293B;
  --neutral-900: #0F172A;

  /* Semantic Colors */
  --success: #16A34A;
  --warning: #D97706;
  --error: #DC2626;
  --info: #2563EB;

  /* Background and Surface Colors */
  --background: var(--neutral-100);
  --surface: #FFFFFF;

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: var(--neutral-200);
  --border-focus: var(--primary);

  /* Layout */
  --header-height: 56px;
  --container-width: 1200px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 6px;
  --radius-lg: 10px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-lg: 0 12px 24px -6px rgba(15, 23, 42, 0.25);

  /* Modal stack */
  --scrim: rgba(15, 23, 42, 0.25);
  --scrim-active: rgba(15, 23, 42, 0.55);

  /* Animation */
  --transition-fast: 150ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
