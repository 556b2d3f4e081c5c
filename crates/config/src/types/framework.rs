//! Framework wiring: installed apps, middleware, templates, admin site, locale.
//!
//! Responsibilities:
//! - Describe the declarative framework configuration as typed data.
//!
//! Does NOT handle:
//! - Anything read from the environment except the debug flag, which the
//!   template engine mirrors.
//!
//! Invariants:
//! - `installed_apps` is framework apps, then third-party apps, then local apps.
//! - Middleware order is significant and preserved.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::constants::{
    ADMIN_SITE_HEADER, ADMIN_SITE_TITLE, ADMIN_URL, FRAMEWORK_APPS, LANGUAGE_CODE, LOCAL_APPS,
    MIDDLEWARE, REST_RENDERER_CLASSES, ROOT_URLCONF, SITE_ID, TEMPLATE_BACKEND,
    TEMPLATE_CONTEXT_PROCESSORS, TEMPLATE_LOADERS, TEMPLATES_DIR_NAME, THIRD_PARTY_APPS,
    TIME_ZONE, WSGI_APPLICATION,
};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Admin site location and branding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSiteSettings {
    pub url: String,
    pub site_title: String,
    pub site_header: String,
}

/// Time zone and internationalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSettings {
    pub time_zone: String,
    pub use_tz: bool,
    pub language_code: String,
    pub use_i18n: bool,
    pub use_l10n: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSettings {
    pub backend: String,
    pub dirs: Vec<PathBuf>,
    pub debug: bool,
    pub loaders: Vec<String>,
    pub context_processors: Vec<String>,
}

/// REST layer rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestSettings {
    pub default_renderer_classes: Vec<String>,
}

/// Everything the framework runtime needs beyond connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameworkSettings {
    pub root_urlconf: String,
    pub wsgi_application: String,
    pub admin: AdminSiteSettings,
    pub locale: LocaleSettings,
    pub site_id: u32,
    pub installed_apps: Vec<String>,
    pub middleware: Vec<String>,
    pub templates: TemplateSettings,
    pub rest: RestSettings,
}

impl FrameworkSettings {
    pub(crate) fn new(apps_dir: &Path, debug: bool) -> Self {
        let installed_apps = FRAMEWORK_APPS
            .iter()
            .chain(THIRD_PARTY_APPS)
            .chain(LOCAL_APPS)
            .map(|s| s.to_string())
            .collect();

        Self {
            root_urlconf: ROOT_URLCONF.to_string(),
            wsgi_application: WSGI_APPLICATION.to_string(),
            admin: AdminSiteSettings {
                url: ADMIN_URL.to_string(),
                site_title: ADMIN_SITE_TITLE.to_string(),
                site_header: ADMIN_SITE_HEADER.to_string(),
            },
            locale: LocaleSettings {
                time_zone: TIME_ZONE.to_string(),
                use_tz: true,
                language_code: LANGUAGE_CODE.to_string(),
                use_i18n: true,
                use_l10n: true,
            },
            site_id: SITE_ID,
            installed_apps,
            middleware: owned(MIDDLEWARE),
            templates: TemplateSettings {
                backend: TEMPLATE_BACKEND.to_string(),
                dirs: vec![apps_dir.join(TEMPLATES_DIR_NAME)],
                debug,
                loaders: owned(TEMPLATE_LOADERS),
                context_processors: owned(TEMPLATE_CONTEXT_PROCESSORS),
            },
            rest: RestSettings {
                default_renderer_classes: owned(REST_RENDERER_CLASSES),
            },
        }
    }

    /// Returns true if `app` is in the installed apps list.
    pub fn is_installed(&self, app: &str) -> bool {
        self.installed_apps.iter().any(|installed| installed == app)
    }
}
