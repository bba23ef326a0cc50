//! OCIO configuration file parsing and management.
//!
//! This module handles loading and parsing `.ocio` configuration files
//! in YAML format. Supports OCIO v1 and v2 config formats.
//!
//! # Example
//!
//! ```ignore
//! use vfx_ocio::Config;
//!
//! // Load from file
//! let config = Config::from_file("aces_1.2/config.ocio")?;
//!
//! // Get color spaces
//! for cs in config.colorspaces() {
//!     println!("{}: {:?}", cs.name(), cs.encoding());
//! }
//!
//! // Create processor
//! let proc = config.processor("ACEScg", "sRGB")?;
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use serde::Deserialize;

use crate::colorspace::{ColorSpace, Encoding, Family};
use crate::context::Context;
use crate::display::{Display, DisplayManager, View, ViewTransform};
use crate::error::{OcioError, OcioResult};
use crate::look::{Look, LookManager};
use crate::processor::{OptimizationLevel, Processor};
use crate::role::Roles;
use crate::transform::*;

/// OCIO configuration.
///
/// The main entry point for color management. A config defines:
/// - Color spaces and their transforms
/// - Roles (semantic mappings)
/// - Displays and views
/// - Looks (creative grades)
#[derive(Debug, Clone)]
pub struct Config {
    /// Config name/description.
    name: String,
    /// Config version (1 or 2).
    version: ConfigVersion,
    /// Search paths for LUTs.
    search_paths: Vec<PathBuf>,
    /// Working directory (config file location).
    working_dir: PathBuf,
    /// All color spaces.
    colorspaces: Vec<ColorSpace>,
    /// Role mappings.
    roles: Roles,
    /// Display/view configuration.
    displays: DisplayManager,
    /// Looks.
    looks: LookManager,
    /// Active displays (subset to show in UI).
    active_displays: Vec<String>,
    /// Active views (subset to show in UI).
    active_views: Vec<String>,
    /// Inactive color spaces (hidden from UI).
    #[allow(dead_code)]
    inactive_colorspaces: Vec<String>,
    /// File rules for automatic color space detection.
    file_rules: Vec<FileRule>,
    /// Views shared across multiple displays.
    shared_views: Vec<SharedView>,
    /// Viewing rules restricting candidate color spaces per view.
    viewing_rules: Vec<ViewingRule>,
    /// Named transforms, resolvable directly by name.
    named_transforms: Vec<NamedTransform>,
    /// View transform used to bridge the scene and display reference
    /// spaces when a `ColorSpaceTransform` crosses them.
    default_view_transform: Option<String>,
    /// Environment/context.
    context: Context,
    /// Strict parsing mode.
    #[allow(dead_code)]
    strict_parsing: bool,
}

/// Config format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigVersion {
    /// OCIO v1.x.
    #[default]
    V1,
    /// OCIO v2.x.
    V2,
}

/// File rule for automatic color space assignment.
#[derive(Debug, Clone)]
pub struct FileRule {
    /// Rule name.
    pub name: String,
    /// File pattern (glob or regex).
    pub pattern: String,
    /// Extension filter.
    pub extension: Option<String>,
    /// Assigned color space.
    pub colorspace: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new empty configuration.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            version: ConfigVersion::V1,
            search_paths: Vec::new(),
            working_dir: PathBuf::from("."),
            colorspaces: Vec::new(),
            roles: Roles::new(),
            displays: DisplayManager::new(),
            looks: LookManager::new(),
            active_displays: Vec::new(),
            active_views: Vec::new(),
            inactive_colorspaces: Vec::new(),
            file_rules: Vec::new(),
            shared_views: Vec::new(),
            viewing_rules: Vec::new(),
            named_transforms: Vec::new(),
            default_view_transform: None,
            context: Context::new(),
            strict_parsing: false,
        }
    }

    /// Constructs a config from a `ConfigBuilder`'s collected fields.
    ///
    /// `description` is accepted for API completeness with the builder but
    /// is not yet tracked on `Config` itself.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_builder(
        name: String,
        _description: String,
        version: ConfigVersion,
        search_paths: Vec<PathBuf>,
        working_dir: PathBuf,
        colorspaces: Vec<ColorSpace>,
        roles: Roles,
        displays: DisplayManager,
        looks: LookManager,
        active_displays: Vec<String>,
        active_views: Vec<String>,
        shared_views: Vec<SharedView>,
        viewing_rules: Vec<ViewingRule>,
        named_transforms: Vec<NamedTransform>,
        inactive_colorspaces: Vec<String>,
        file_rules: Vec<FileRule>,
        context: Context,
    ) -> Self {
        Self {
            name,
            version,
            search_paths,
            working_dir,
            colorspaces,
            roles,
            displays,
            looks,
            active_displays,
            active_views,
            inactive_colorspaces,
            file_rules,
            shared_views,
            viewing_rules,
            named_transforms,
            default_view_transform: None,
            context,
            strict_parsing: true,
        }
    }

    /// Sets the view transform used to bridge scene and display reference
    /// spaces. Used by `ColorSpaceTransform` when `src` and `dst` live in
    /// different reference spaces, and as the fallback VT for legacy views.
    pub fn set_default_view_transform(&mut self, name: impl Into<String>) {
        self.default_view_transform = Some(name.into());
    }

    /// Returns the default view transform name, if set.
    #[inline]
    pub fn default_view_transform(&self) -> Option<&str> {
        self.default_view_transform.as_deref()
    }

    /// Adds a named transform, resolvable directly by name.
    pub fn add_named_transform(&mut self, transform: NamedTransform) {
        self.named_transforms.push(transform);
    }

    /// Looks up a named transform by name.
    pub fn named_transform(&self, name: &str) -> Option<&NamedTransform> {
        self.named_transforms.iter().find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// Adds a shared view definition.
    pub fn add_shared_view(&mut self, view: SharedView) {
        self.shared_views.push(view);
    }

    /// Looks up a shared view by name.
    pub fn shared_view(&self, name: &str) -> Option<&SharedView> {
        self.shared_views.iter().find(|v| v.name.eq_ignore_ascii_case(name))
    }

    /// Adds a viewing rule.
    pub fn add_viewing_rule(&mut self, rule: ViewingRule) {
        self.viewing_rules.push(rule);
    }

    /// Looks up a viewing rule by name.
    pub fn viewing_rule(&self, name: &str) -> Option<&ViewingRule> {
        self.viewing_rules.iter().find(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> OcioResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OcioError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let working_dir = path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Self::from_yaml_str(&content, working_dir)
    }

    /// Loads configuration from YAML string.
    pub fn from_yaml_str(yaml: &str, working_dir: PathBuf) -> OcioResult<Self> {
        let raw: RawConfig = serde_yaml::from_str(yaml)?;
        Self::from_raw(raw, working_dir)
    }

    /// Constructs config from parsed raw data.
    fn from_raw(raw: RawConfig, working_dir: PathBuf) -> OcioResult<Self> {
        let version = if raw.ocio_profile_version.starts_with('2') {
            ConfigVersion::V2
        } else if raw.ocio_profile_version.starts_with('1') {
            ConfigVersion::V1
        } else {
            return Err(OcioError::UnsupportedVersion {
                version: raw.ocio_profile_version.clone(),
            });
        };

        let mut config = Self {
            name: raw.name.unwrap_or_default(),
            version,
            working_dir: working_dir.clone(),
            search_paths: raw
                .search_path
                .map(|s| {
                    s.split(':')
                        .filter(|p| !p.is_empty())
                        .map(|p| working_dir.join(p))
                        .collect()
                })
                .unwrap_or_default(),
            colorspaces: Vec::new(),
            roles: Roles::new(),
            displays: DisplayManager::new(),
            looks: LookManager::new(),
            active_displays: raw.active_displays.unwrap_or_default(),
            active_views: raw.active_views.unwrap_or_default(),
            inactive_colorspaces: raw.inactive_colorspaces.unwrap_or_default(),
            file_rules: Vec::new(),
            shared_views: Vec::new(),
            viewing_rules: Vec::new(),
            named_transforms: Vec::new(),
            default_view_transform: raw.default_view_transform.clone(),
            context: Context::new(),
            strict_parsing: raw.strictparsing.unwrap_or(true),
        };

        // Parse roles
        if let Some(roles) = raw.roles {
            for (role, cs) in roles {
                config.roles.define(role, cs);
            }
        }

        // Parse color spaces
        if let Some(colorspaces) = raw.colorspaces {
            for raw_cs in colorspaces {
                let cs = config.parse_colorspace(raw_cs)?;
                config.colorspaces.push(cs);
            }
        }

        // Parse displays
        if let Some(displays) = raw.displays {
            for (name, views) in displays {
                let mut display = Display::new(&name);
                for raw_view in views {
                    let mut view = View::new(&raw_view.name, &raw_view.colorspace)
                        .with_look(raw_view.looks.unwrap_or_default());
                    if let Some(vt) = raw_view.view_transform {
                        view = view.with_view_transform(vt);
                    }
                    if let Some(rule) = raw_view.rule {
                        view = view.with_rule(rule);
                    }
                    display.add_view(view);
                }
                config.displays.add_display(display);
            }
        }

        // Parse looks
        if let Some(looks) = raw.looks {
            for raw_look in looks {
                let mut look = Look::new(&raw_look.name)
                    .process_space(raw_look.process_space.unwrap_or_default())
                    .description(raw_look.description.unwrap_or_default());
                if let Some(t) = &raw_look.transform {
                    look = look.transform(convert_raw_transform(t)?);
                }
                if let Some(t) = &raw_look.inverse_transform {
                    look = look.inverse_transform(convert_raw_transform(t)?);
                }
                config.looks.add(look);
            }
        }

        // Parse view transforms (v2)
        if let Some(view_transforms) = raw.view_transforms {
            for raw_vt in view_transforms {
                let mut vt = ViewTransform::new(&raw_vt.name)
                    .with_description(raw_vt.description.unwrap_or_default());
                if let Some(family) = &raw_vt.family {
                    vt = vt.with_family(family.clone());
                }
                if let Some(t) = &raw_vt.from_scene_reference {
                    vt = vt.with_from_scene_reference(convert_raw_transform(t)?);
                }
                if let Some(t) = &raw_vt.to_scene_reference {
                    vt = vt.with_to_scene_reference(convert_raw_transform(t)?);
                }
                if let Some(t) = &raw_vt.from_display_reference {
                    vt = vt.with_from_display_reference(convert_raw_transform(t)?);
                }
                if let Some(t) = &raw_vt.to_display_reference {
                    vt = vt.with_to_display_reference(convert_raw_transform(t)?);
                }
                config.displays.add_view_transform(vt);
            }
        }

        // Parse file rules
        if let Some(file_rules) = raw.file_rules {
            for raw_rule in file_rules {
                config.file_rules.push(FileRule {
                    name: raw_rule.name,
                    pattern: raw_rule.pattern.unwrap_or_default(),
                    extension: raw_rule.extension,
                    colorspace: raw_rule.colorspace,
                });
            }
        }

        Ok(config)
    }

    /// Parses a raw colorspace definition.
    fn parse_colorspace(&self, raw: RawColorSpace) -> OcioResult<ColorSpace> {
        let mut builder = ColorSpace::builder(&raw.name);

        if let Some(desc) = raw.description {
            builder = builder.description(desc);
        }

        if let Some(family) = raw.family {
            let parsed = Family::parse(&family);
            if parsed == Family::Display {
                builder = builder.reference_space(crate::colorspace::ReferenceSpace::Display);
            }
            builder = builder.family(parsed);
        }

        if let Some(encoding) = raw.encoding {
            builder = builder.encoding(Encoding::parse(&encoding));
        }

        if raw.isdata == Some(true) {
            builder = builder.is_data(true);
        }

        if let Some(aliases) = raw.aliases {
            for alias in aliases {
                builder = builder.alias(alias);
            }
        }

        // v1-style `to_reference`/`from_reference` map onto whichever
        // reference space this color space's family implies; v2 configs use
        // the explicit scene/display variants instead (mutually exclusive
        // with the v1 keys in practice).
        if let Some(t) = raw.to_reference.or(raw.to_scene_reference).or(raw.to_display_reference) {
            builder = builder.to_reference(convert_raw_transform(&t)?);
        }
        if let Some(t) = raw.from_reference.or(raw.from_scene_reference).or(raw.from_display_reference) {
            builder = builder.from_reference(convert_raw_transform(&t)?);
        }

        Ok(builder.build())
    }

    /// Returns config name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns config version.
    #[inline]
    pub fn version(&self) -> ConfigVersion {
        self.version
    }

    /// Returns the working directory.
    #[inline]
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Returns all search paths.
    #[inline]
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Returns all color spaces.
    #[inline]
    pub fn colorspaces(&self) -> &[ColorSpace] {
        &self.colorspaces
    }

    /// Gets a color space by name (or alias).
    pub fn colorspace(&self, name: &str) -> Option<&ColorSpace> {
        // Check roles first
        if let Some(cs_name) = self.roles.get(name) {
            return self.colorspaces.iter().find(|cs| cs.matches_name(cs_name));
        }
        self.colorspaces.iter().find(|cs| cs.matches_name(name))
    }

    /// Returns color space names.
    pub fn colorspace_names(&self) -> impl Iterator<Item = &str> {
        self.colorspaces.iter().map(|cs| cs.name())
    }

    /// Returns the roles mapping.
    #[inline]
    pub fn roles(&self) -> &Roles {
        &self.roles
    }

    /// Returns the display manager.
    #[inline]
    pub fn displays(&self) -> &DisplayManager {
        &self.displays
    }

    /// Returns the look manager.
    #[inline]
    pub fn looks(&self) -> &LookManager {
        &self.looks
    }

    /// Returns active display names.
    #[inline]
    pub fn active_displays(&self) -> &[String] {
        &self.active_displays
    }

    /// Returns active view names.
    #[inline]
    pub fn active_views(&self) -> &[String] {
        &self.active_views
    }

    /// Returns the default display name.
    pub fn default_display(&self) -> Option<&str> {
        self.active_displays
            .first()
            .map(String::as_str)
            .or_else(|| self.displays.default_display())
    }

    /// Returns the default view for a display.
    pub fn default_view(&self, display: &str) -> Option<&str> {
        self.displays
            .display(display)
            .and_then(|d| d.default_view())
    }

    /// Gets the context.
    #[inline]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Gets mutable context.
    #[inline]
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    /// Creates a processor for conversion between two color spaces.
    pub fn processor(&self, src: &str, dst: &str) -> OcioResult<Processor> {
        self.processor_with_opts(src, dst, OptimizationLevel::default())
    }

    /// Creates a processor with optimization level.
    pub fn processor_with_opts(
        &self,
        src: &str,
        dst: &str,
        optimization: OptimizationLevel,
    ) -> OcioResult<Processor> {
        let src_cs = self
            .colorspace(src)
            .ok_or_else(|| OcioError::ColorSpaceNotFound { name: src.into() })?;
        let dst_cs = self
            .colorspace(dst)
            .ok_or_else(|| OcioError::ColorSpaceNotFound { name: dst.into() })?;

        // Non-color data spaces bypass the pipeline entirely: neither the
        // source nor the destination transform should touch the values.
        if src_cs.is_data() || dst_cs.is_data() {
            return Ok(Processor::new());
        }

        // Build transform chain: src -> reference -> dst, bridging reference
        // spaces via the default view transform when src and dst disagree.
        let mut transforms = Vec::new();

        if let Some(t) = src_cs.to_reference() {
            transforms.push(t.clone());
        }

        if src_cs.reference_space() != dst_cs.reference_space() {
            let vt_name = self.default_view_transform.as_deref().ok_or_else(|| {
                OcioError::Validation(format!(
                    "no default_view_transform to bridge '{src}' (scene) and '{dst}' (display) reference spaces"
                ))
            })?;
            let vt = self.displays.view_transform(vt_name).ok_or_else(|| {
                OcioError::Validation(format!("default_view_transform '{vt_name}' not found"))
            })?;
            if src_cs.reference_space() == crate::colorspace::ReferenceSpace::Scene {
                if let Some(t) = vt.from_scene_reference() {
                    transforms.push(t.clone());
                }
                if let Some(t) = vt.to_display_reference() {
                    transforms.push(t.clone());
                }
            } else {
                if let Some(t) = vt.from_display_reference() {
                    transforms.push(t.clone());
                }
                if let Some(t) = vt.to_scene_reference() {
                    transforms.push(t.clone());
                }
            }
        }

        if let Some(t) = dst_cs.from_reference() {
            transforms.push(t.clone());
        }

        if transforms.is_empty() {
            return Ok(Processor::new());
        }

        let mut used = Vec::new();
        let resolved: Vec<Transform> = transforms
            .iter()
            .map(|t| self.resolve_transform(t, &mut used))
            .collect::<OcioResult<Vec<_>>>()?;

        let group = Transform::group(resolved);
        let mut processor = Processor::from_transform(&group, TransformDirection::Forward)?;
        processor.optimize(optimization);
        Ok(processor)
    }

    /// Creates a display processor.
    ///
    /// When the requested view names an explicit `view_transform`, the chain
    /// is built as scene_reference -> view transform -> display_reference
    /// rather than through [`Config::default_view_transform`]; otherwise this
    /// falls back to the ordinary colorspace-to-colorspace path.
    pub fn display_processor(
        &self,
        src: &str,
        display: &str,
        view: &str,
    ) -> OcioResult<Processor> {
        let disp = self
            .displays
            .display(display)
            .ok_or_else(|| OcioError::DisplayNotFound {
                name: display.into(),
            })?;

        let v = disp
            .view(view)
            .ok_or_else(|| OcioError::ViewNotFound {
                display: display.into(),
                view: view.into(),
            })?;

        let dst = v.colorspace();

        let Some(vt_name) = v.view_transform() else {
            return self.processor(src, dst);
        };

        let src_cs = self
            .colorspace(src)
            .ok_or_else(|| OcioError::ColorSpaceNotFound { name: src.into() })?;
        let dst_cs = self
            .colorspace(dst)
            .ok_or_else(|| OcioError::ColorSpaceNotFound { name: dst.into() })?;

        if src_cs.is_data() || dst_cs.is_data() {
            return Ok(Processor::new());
        }

        let vt = self.displays.view_transform(vt_name).ok_or_else(|| {
            OcioError::Validation(format!("view_transform '{vt_name}' not found"))
        })?;

        let mut transforms = Vec::new();
        if let Some(t) = src_cs.to_reference() {
            transforms.push(t.clone());
        }
        if let Some(t) = vt.from_scene_reference() {
            transforms.push(t.clone());
        }
        if let Some(t) = vt.to_display_reference() {
            transforms.push(t.clone());
        }
        if let Some(t) = dst_cs.from_reference() {
            transforms.push(t.clone());
        }

        if transforms.is_empty() {
            return Ok(Processor::new());
        }

        let mut used = Vec::new();
        let resolved: Vec<Transform> = transforms
            .iter()
            .map(|t| self.resolve_transform(t, &mut used))
            .collect::<OcioResult<Vec<_>>>()?;

        let group = Transform::group(resolved);
        let mut processor = Processor::from_transform(&group, TransformDirection::Forward)?;
        processor.optimize(OptimizationLevel::default());
        Ok(processor)
    }

    /// Creates a processor with looks applied.
    ///
    /// Looks are applied in the look's process space between src and dst.
    /// Multiple looks can be specified as comma-separated string.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let proc = config.processor_with_looks("ACEScg", "sRGB", "ShowLUT, ShotGrade")?;
    /// ```
    pub fn processor_with_looks(
        &self,
        src: &str,
        dst: &str,
        looks: &str,
    ) -> OcioResult<Processor> {
        use crate::look::parse_looks;
        
        let look_specs = parse_looks(looks);
        if look_specs.is_empty() {
            return self.processor(src, dst);
        }
        
        let mut transforms = Vec::new();
        
        // Source to reference
        let src_cs = self
            .colorspace(src)
            .ok_or_else(|| OcioError::ColorSpaceNotFound { name: src.into() })?;
        if let Some(t) = src_cs.to_reference() {
            transforms.push(t.clone());
        }
        
        // Apply each look
        for (look_name, forward) in look_specs {
            let look = self
                .looks
                .get(look_name)
                .ok_or_else(|| OcioError::LookNotFound { name: look_name.into() })?;
            
            // Convert to process space if specified
            if let Some(ps_name) = look.get_process_space() {
                if let Some(ps) = self.colorspace(ps_name) {
                    if let Some(t) = ps.from_reference() {
                        transforms.push(t.clone());
                    }
                }
            }
            
            // Apply look transform
            let look_transform = if forward {
                look.get_transform()
            } else {
                look.get_inverse_transform().or_else(|| look.get_transform())
            };
            
            if let Some(t) = look_transform {
                let t = if forward {
                    t.clone()
                } else {
                    Transform::Group(GroupTransform {
                        transforms: vec![t.clone()],
                        direction: TransformDirection::Inverse,
                    })
                };
                // A look whose transform references a missing file/cccid is
                // skipped rather than failing the whole processor build.
                let mut probe = Vec::new();
                match self.resolve_transform(&t, &mut probe) {
                    Ok(_) => transforms.push(t),
                    Err(e) if e.is_missing() => {}
                    Err(e) => return Err(e),
                }
            }
            
            // Return from process space
            if let Some(ps_name) = look.get_process_space() {
                if let Some(ps) = self.colorspace(ps_name) {
                    if let Some(t) = ps.to_reference() {
                        transforms.push(t.clone());
                    }
                }
            }
        }
        
        // Reference to destination
        let dst_cs = self
            .colorspace(dst)
            .ok_or_else(|| OcioError::ColorSpaceNotFound { name: dst.into() })?;
        if let Some(t) = dst_cs.from_reference() {
            transforms.push(t.clone());
        }
        
        if transforms.is_empty() {
            return Ok(Processor::new());
        }

        let mut used = Vec::new();
        let resolved: Vec<Transform> = transforms
            .iter()
            .map(|t| self.resolve_transform(t, &mut used))
            .collect::<OcioResult<Vec<_>>>()?;

        let group = Transform::group(resolved);
        let mut processor = Processor::from_transform(&group, TransformDirection::Forward)?;
        processor.optimize(OptimizationLevel::default());
        Ok(processor)
    }

    /// Resolves a file path using search paths.
    pub fn resolve_file(&self, filename: &str) -> Option<PathBuf> {
        // Try as absolute path first
        let path = PathBuf::from(filename);
        if path.is_absolute() && path.exists() {
            return Some(path);
        }

        // Try relative to working dir
        let path = self.working_dir.join(filename);
        if path.exists() {
            return Some(path);
        }

        // Try search paths
        for search_path in &self.search_paths {
            let path = search_path.join(filename);
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    /// Walks a transform tree, expanding context variables in any
    /// [`FileTransform`] source path, resolving it against the search paths,
    /// and — for CDL collection files (`.ccc`/`.cc`/`.cdl`) — selecting the
    /// requested `cccid` and baking it directly into a [`Transform::Cdl`].
    ///
    /// Every variable name encountered (found or not) is pushed onto `used`;
    /// callers fold this into the processor cache fingerprint.
    fn resolve_transform(&self, t: &Transform, used: &mut Vec<String>) -> OcioResult<Transform> {
        match t {
            Transform::FileTransform(ft) => {
                let raw_src = ft.src.to_string_lossy().into_owned();
                let resolved_src = self.context.resolve_tracked(&raw_src, used);
                let path = self.resolve_file(&resolved_src).ok_or_else(|| {
                    OcioError::TransformFileNotFound {
                        path: PathBuf::from(&resolved_src),
                    }
                })?;

                let ext = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e.to_lowercase())
                    .unwrap_or_default();

                if matches!(ext.as_str(), "ccc" | "cc" | "cdl") {
                    let collection = vfx_lut::cdl::read_any(&path)?;
                    let cc = collection
                        .resolve(ft.ccc_id.as_deref())
                        .ok_or_else(|| OcioError::MissingCorrection {
                            path: path.clone(),
                            id: ft.ccc_id.clone().unwrap_or_default(),
                        })?;

                    return Ok(Transform::Cdl(CdlTransform {
                        slope: cc.slope.map(|v| v as f64),
                        offset: cc.offset.map(|v| v as f64),
                        power: cc.power.map(|v| v as f64),
                        saturation: cc.saturation as f64,
                        style: CdlStyle::default(),
                        direction: ft.direction,
                    }));
                }

                Ok(Transform::FileTransform(FileTransform {
                    src: path,
                    ccc_id: ft.ccc_id.clone(),
                    interpolation: ft.interpolation,
                    direction: ft.direction,
                }))
            }
            Transform::Group(g) => Ok(Transform::Group(GroupTransform {
                transforms: g
                    .transforms
                    .iter()
                    .map(|x| self.resolve_transform(x, used))
                    .collect::<OcioResult<Vec<_>>>()?,
                direction: g.direction,
            })),
            other => Ok(other.clone()),
        }
    }

    /// Gets color space from file rules.
    pub fn colorspace_from_filepath(&self, filepath: &str) -> Option<&str> {
        for rule in &self.file_rules {
            if let Some(ext) = &rule.extension {
                if !filepath.ends_with(ext) {
                    continue;
                }
            }
            // Simple glob matching
            if rule.pattern.is_empty() || filepath.contains(&rule.pattern) {
                return Some(&rule.colorspace);
            }
        }
        None
    }

    /// Adds a color space to the config.
    pub fn add_colorspace(&mut self, cs: ColorSpace) {
        self.colorspaces.push(cs);
    }

    /// Adds a look to the config.
    pub fn add_look(&mut self, look: Look) {
        self.looks.add(look);
    }

    /// Sets a role mapping.
    pub fn set_role(&mut self, role: impl Into<String>, colorspace: impl Into<String>) {
        self.roles.define(role, colorspace);
    }
}

// ============================================================================
// Raw YAML structures for serde (WIP - for full OCIO config parsing)
// ============================================================================

/// Converts a parsed direction string (`"forward"`/`"inverse"`); defaults
/// to forward when absent, matching the OCIO YAML convention.
fn raw_direction(s: &Option<String>) -> TransformDirection {
    match s.as_deref() {
        Some("inverse") => TransformDirection::Inverse,
        _ => TransformDirection::Forward,
    }
}

fn vec3(v: &Option<Vec<f64>>, default: f64) -> [f64; 3] {
    match v {
        Some(v) if v.len() >= 3 => [v[0], v[1], v[2]],
        _ => [default; 3],
    }
}

/// Converts one parsed YAML transform node into the core `Transform` enum.
fn convert_raw_transform_def(raw: &RawTransformDef) -> OcioResult<Transform> {
    if let Some(m) = &raw.matrix {
        let mut matrix = MatrixTransform::IDENTITY;
        if let Some(v) = &m.matrix {
            for (i, val) in v.iter().take(16).enumerate() {
                matrix[i] = *val;
            }
        }
        let mut offset = [0.0; 4];
        if let Some(v) = &m.offset {
            for (i, val) in v.iter().take(4).enumerate() {
                offset[i] = *val;
            }
        }
        return Ok(Transform::Matrix(MatrixTransform {
            matrix,
            offset,
            direction: raw_direction(&m.direction),
        }));
    }
    if let Some(f) = &raw.file {
        return Ok(Transform::FileTransform(FileTransform {
            src: PathBuf::from(&f.src),
            ccc_id: f.cccid.clone(),
            interpolation: match f.interpolation.as_deref() {
                Some("nearest") => Interpolation::Nearest,
                Some("tetrahedral") => Interpolation::Tetrahedral,
                Some("best") => Interpolation::Best,
                _ => Interpolation::Linear,
            },
            direction: raw_direction(&f.direction),
        }));
    }
    if let Some(e) = &raw.exponent {
        let mut value = [1.0; 4];
        for (i, val) in e.value.iter().take(4).enumerate() {
            value[i] = *val;
        }
        return Ok(Transform::Exponent(ExponentTransform {
            value,
            negative_style: NegativeStyle::Clamp,
            direction: raw_direction(&e.direction),
        }));
    }
    if let Some(l) = &raw.log {
        return Ok(Transform::Log(LogTransform {
            base: l.base.unwrap_or(2.0),
            direction: raw_direction(&l.direction),
        }));
    }
    if let Some(c) = &raw.cdl {
        return Ok(Transform::Cdl(CdlTransform {
            slope: vec3(&c.slope, 1.0),
            offset: vec3(&c.offset, 0.0),
            power: vec3(&c.power, 1.0),
            saturation: c.saturation.unwrap_or(1.0),
            style: CdlStyle::default(),
            direction: raw_direction(&c.direction),
        }));
    }
    if let Some(cs) = &raw.colorspace {
        return Ok(Transform::ColorSpace(ColorSpaceTransform {
            src: cs.src.clone(),
            dst: cs.dst.clone(),
            direction: raw_direction(&cs.direction),
        }));
    }
    if let Some(b) = &raw.builtin {
        return Ok(Transform::Builtin(BuiltinTransform {
            style: b.style.clone(),
            direction: raw_direction(&b.direction),
        }));
    }
    if let Some(r) = &raw.range {
        return Ok(Transform::Range(RangeTransform {
            min_in: r.min_in_value,
            max_in: r.max_in_value,
            min_out: r.min_out_value,
            max_out: r.max_out_value,
            style: RangeStyle::default(),
            direction: raw_direction(&r.direction),
        }));
    }
    Err(OcioError::InvalidTransform {
        reason: "unrecognized or empty transform node".into(),
    })
}

/// Converts a parsed YAML transform (single node or a `!<GroupTransform>`
/// sequence) into the core `Transform` enum.
fn convert_raw_transform(raw: &RawTransform) -> OcioResult<Transform> {
    match raw {
        RawTransform::Single(def) => convert_raw_transform_def(def),
        RawTransform::Group(defs) => {
            let transforms = defs
                .iter()
                .map(convert_raw_transform_def)
                .collect::<OcioResult<Vec<_>>>()?;
            Ok(Transform::group(transforms))
        }
    }
}

/// A reusable named transform, resolved directly by name from a [`View`] or
/// [`Look`](crate::look::Look), bypassing reference-space plumbing entirely.
#[derive(Debug, Clone)]
pub struct NamedTransform {
    name: String,
    description: String,
    family: String,
    forward: Option<Transform>,
    inverse: Option<Transform>,
}

impl NamedTransform {
    /// Creates a new named transform.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            family: String::new(),
            forward: None,
            inverse: None,
        }
    }

    /// Sets the description.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Sets the family/category.
    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    /// Sets the forward transform.
    pub fn forward(mut self, t: Transform) -> Self {
        self.forward = Some(t);
        self
    }

    /// Sets the inverse transform.
    pub fn inverse(mut self, t: Transform) -> Self {
        self.inverse = Some(t);
        self
    }

    /// Returns the name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[inline]
    pub fn description_str(&self) -> &str {
        &self.description
    }

    /// Returns the forward transform.
    #[inline]
    pub fn forward_transform(&self) -> Option<&Transform> {
        self.forward.as_ref()
    }

    /// Returns the explicit inverse transform, if any.
    #[inline]
    pub fn inverse_transform(&self) -> Option<&Transform> {
        self.inverse.as_ref()
    }

    /// Returns a transform for the requested direction, substituting a
    /// `Group` wrapper with inverse direction when no explicit inverse was
    /// authored.
    pub fn transform(&self, direction: TransformDirection) -> Option<Transform> {
        match direction {
            TransformDirection::Forward => self.forward.clone(),
            TransformDirection::Inverse => self.inverse.clone().or_else(|| {
                self.forward.clone().map(|t| {
                    Transform::Group(GroupTransform {
                        transforms: vec![t],
                        direction: TransformDirection::Inverse,
                    })
                })
            }),
        }
    }
}

/// A display/view pairing shared across multiple displays (OCIO v2
/// `shared_views`), referenced from a [`Display`] by name.
#[derive(Debug, Clone)]
pub struct SharedView {
    /// Shared view name.
    pub name: String,
    /// View transform name, for VT-based views.
    pub view_transform: Option<String>,
    /// Target color space, for legacy (colorspace-only) views.
    pub colorspace: Option<String>,
    /// Comma-separated look names to apply.
    pub looks: Option<String>,
    /// Viewing rule name restricting which source spaces may use this view.
    pub rule: Option<String>,
    /// Description.
    pub description: String,
}

impl SharedView {
    /// Creates a new shared view with the given name and target colorspace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            view_transform: None,
            colorspace: None,
            looks: None,
            rule: None,
            description: String::new(),
        }
    }
}

/// Restricts which color spaces/encodings may appear in a given view
/// (`viewing_rules`), used by client UIs to filter valid source spaces.
#[derive(Debug, Clone, Default)]
pub struct ViewingRule {
    /// Rule name.
    pub name: String,
    /// Allowed color space names (empty = unrestricted).
    pub colorspaces: Vec<String>,
    /// Allowed encodings (empty = unrestricted).
    pub encodings: Vec<String>,
}

impl ViewingRule {
    /// Creates a new, unrestricted viewing rule.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colorspaces: Vec::new(),
            encodings: Vec::new(),
        }
    }
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct RawConfig {
    ocio_profile_version: String,
    name: Option<String>,
    description: Option<String>,
    search_path: Option<String>,
    strictparsing: Option<bool>,
    roles: Option<HashMap<String, String>>,
    colorspaces: Option<Vec<RawColorSpace>>,
    displays: Option<HashMap<String, Vec<RawView>>>,
    active_displays: Option<Vec<String>>,
    active_views: Option<Vec<String>>,
    inactive_colorspaces: Option<Vec<String>>,
    looks: Option<Vec<RawLook>>,
    view_transforms: Option<Vec<RawViewTransform>>,
    file_rules: Option<Vec<RawFileRule>>,
    default_view_transform: Option<String>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct RawColorSpace {
    name: String,
    description: Option<String>,
    family: Option<String>,
    encoding: Option<String>,
    bitdepth: Option<String>,
    isdata: Option<bool>,
    aliases: Option<Vec<String>>,
    to_reference: Option<RawTransform>,
    from_reference: Option<RawTransform>,
    to_scene_reference: Option<RawTransform>,
    from_scene_reference: Option<RawTransform>,
    to_display_reference: Option<RawTransform>,
    from_display_reference: Option<RawTransform>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct RawView {
    name: String,
    colorspace: String,
    looks: Option<String>,
    view_transform: Option<String>,
    rule: Option<String>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct RawLook {
    name: String,
    process_space: Option<String>,
    description: Option<String>,
    transform: Option<RawTransform>,
    inverse_transform: Option<RawTransform>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct RawViewTransform {
    name: String,
    description: Option<String>,
    family: Option<String>,
    from_scene_reference: Option<RawTransform>,
    to_scene_reference: Option<RawTransform>,
    from_display_reference: Option<RawTransform>,
    to_display_reference: Option<RawTransform>,
}

#[derive(Debug, Deserialize)]
struct RawFileRule {
    name: String,
    pattern: Option<String>,
    extension: Option<String>,
    colorspace: String,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTransform {
    Single(RawTransformDef),
    Group(Vec<RawTransformDef>),
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct RawTransformDef {
    #[serde(rename = "!<MatrixTransform>")]
    matrix: Option<RawMatrixTransform>,
    #[serde(rename = "!<FileTransform>")]
    file: Option<RawFileTransform>,
    #[serde(rename = "!<ExponentTransform>")]
    exponent: Option<RawExponentTransform>,
    #[serde(rename = "!<LogTransform>")]
    log: Option<RawLogTransform>,
    #[serde(rename = "!<CDLTransform>")]
    cdl: Option<RawCdlTransform>,
    #[serde(rename = "!<ColorSpaceTransform>")]
    colorspace: Option<RawColorSpaceTransform>,
    #[serde(rename = "!<BuiltinTransform>")]
    builtin: Option<RawBuiltinTransform>,
    #[serde(rename = "!<RangeTransform>")]
    range: Option<RawRangeTransform>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct RawMatrixTransform {
    matrix: Option<Vec<f64>>,
    offset: Option<Vec<f64>>,
    direction: Option<String>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct RawFileTransform {
    src: String,
    cccid: Option<String>,
    interpolation: Option<String>,
    direction: Option<String>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct RawExponentTransform {
    value: Vec<f64>,
    direction: Option<String>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct RawLogTransform {
    base: Option<f64>,
    direction: Option<String>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct RawCdlTransform {
    slope: Option<Vec<f64>>,
    offset: Option<Vec<f64>>,
    power: Option<Vec<f64>>,
    saturation: Option<f64>,
    direction: Option<String>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct RawColorSpaceTransform {
    src: String,
    dst: String,
    direction: Option<String>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct RawBuiltinTransform {
    style: String,
    direction: Option<String>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct RawRangeTransform {
    min_in_value: Option<f64>,
    max_in_value: Option<f64>,
    min_out_value: Option<f64>,
    max_out_value: Option<f64>,
    direction: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_CONFIG: &str = r#"
ocio_profile_version: 2

roles:
  reference: Linear
  scene_linear: Linear
  default: sRGB

colorspaces:
  - name: Linear
    family: Scene
    encoding: scene-linear
    description: Linear reference

  - name: sRGB
    family: Display
    encoding: sdr-video
    description: sRGB display

displays:
  sRGB:
    - name: Raw
      colorspace: Linear
    - name: sRGB
      colorspace: sRGB
"#;

    #[test]
    fn parse_minimal_config() {
        let config = Config::from_yaml_str(MINIMAL_CONFIG, PathBuf::from(".")).unwrap();

        assert_eq!(config.version(), ConfigVersion::V2);
        assert_eq!(config.colorspaces().len(), 2);
        assert!(config.colorspace("Linear").is_some());
        assert!(config.colorspace("sRGB").is_some());
    }

    #[test]
    fn roles_lookup() {
        let config = Config::from_yaml_str(MINIMAL_CONFIG, PathBuf::from(".")).unwrap();

        // Role should resolve to color space
        let cs = config.colorspace("scene_linear").unwrap();
        assert_eq!(cs.name(), "Linear");
    }

    #[test]
    fn displays_parsed() {
        let config = Config::from_yaml_str(MINIMAL_CONFIG, PathBuf::from(".")).unwrap();

        let displays = config.displays();
        assert!(displays.display("sRGB").is_some());

        let display = displays.display("sRGB").unwrap();
        assert_eq!(display.views().len(), 2);
    }

    #[test]
    fn create_processor() {
        let config = Config::from_yaml_str(MINIMAL_CONFIG, PathBuf::from(".")).unwrap();

        // Should not fail even without transforms defined
        let result = config.processor("Linear", "sRGB");
        assert!(result.is_ok());
    }

    #[test]
    fn colorspace_not_found() {
        let config = Config::from_yaml_str(MINIMAL_CONFIG, PathBuf::from(".")).unwrap();

        let result = config.processor("NonExistent", "sRGB");
        assert!(matches!(result, Err(OcioError::ColorSpaceNotFound { .. })));
    }
}
