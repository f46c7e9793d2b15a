use std::path::PathBuf;

use crate::foundation::{
    core::RomGeometry,
    error::{ImgRomError, ImgRomResult},
};

/// Raster width of the canonical profile.
pub const CANONICAL_WIDTH: u32 = 200;
/// Raster height of the canonical profile.
pub const CANONICAL_HEIGHT: u32 = 150;
/// Frames requested by the video profile when none are given.
pub const DEFAULT_VIDEO_FRAMES: u32 = 16;
/// Where the artifact lands unless told otherwise.
pub const DEFAULT_OUT_PATH: &str = "src/image_rom.v";
/// Name of the generated Verilog module.
pub const DEFAULT_MODULE_NAME: &str = "image_rom";
/// Default input of the still-image profile.
pub const DEFAULT_IMAGE_INPUT: &str = "image.png";
/// Default input of the video profile.
pub const DEFAULT_VIDEO_INPUT: &str = "video.mp4";

/// Immutable description of one ROM build: raster, frame count and destination.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RomConfig {
    pub width: u32,
    pub height: u32,
    pub frames: u32,
    pub out_path: PathBuf,
    pub module_name: String,
}

impl RomConfig {
    /// Single frame at the canonical raster.
    pub fn still() -> Self {
        Self::video(1)
    }

    /// `frames` frames at the canonical raster.
    pub fn video(frames: u32) -> Self {
        Self {
            width: CANONICAL_WIDTH,
            height: CANONICAL_HEIGHT,
            frames,
            out_path: PathBuf::from(DEFAULT_OUT_PATH),
            module_name: DEFAULT_MODULE_NAME.to_string(),
        }
    }

    pub fn with_out_path(mut self, out_path: impl Into<PathBuf>) -> Self {
        self.out_path = out_path.into();
        self
    }

    pub fn with_module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = name.into();
        self
    }

    pub fn with_raster(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn geometry(&self) -> ImgRomResult<RomGeometry> {
        RomGeometry::new(self.width, self.height, self.frames)
    }

    /// Check the whole config and hand back its geometry.
    pub fn validate(&self) -> ImgRomResult<RomGeometry> {
        let geom = self.geometry()?;
        if !is_verilog_identifier(&self.module_name) {
            return Err(ImgRomError::validation(format!(
                "module name '{}' is not a valid Verilog identifier",
                self.module_name
            )));
        }
        if self.out_path.as_os_str().is_empty() {
            return Err(ImgRomError::validation("output path must not be empty"));
        }
        Ok(geom)
    }
}

/// Reserved words of IEEE 1364-2005; none of them may name a module.
const VERILOG_KEYWORDS: &[&str] = &[
    "always", "and", "assign", "automatic", "begin", "buf", "bufif0", "bufif1", "case", "casex",
    "casez", "cell", "cmos", "config", "deassign", "default", "defparam", "design", "disable",
    "edge", "else", "end", "endcase", "endconfig", "endfunction", "endgenerate", "endmodule",
    "endprimitive", "endspecify", "endtable", "endtask", "event", "for", "force", "forever",
    "fork", "function", "generate", "genvar", "highz0", "highz1", "if", "ifnone", "incdir",
    "include", "initial", "inout", "input", "instance", "integer", "join", "large", "liblist",
    "library", "localparam", "macromodule", "medium", "module", "nand", "negedge", "nmos", "nor",
    "noshowcancelled", "not", "notif0", "notif1", "or", "output", "parameter", "pmos", "posedge",
    "primitive", "pull0", "pull1", "pulldown", "pullup", "pulsestyle_ondetect",
    "pulsestyle_onevent", "rcmos", "real", "realtime", "reg", "release", "repeat", "rnmos",
    "rpmos", "rtran", "rtranif0", "rtranif1", "scalared", "showcancelled", "signed", "small",
    "specify", "specparam", "strong0", "strong1", "supply0", "supply1", "table", "task", "time",
    "tran", "tranif0", "tranif1", "tri", "tri0", "tri1", "triand", "trior", "trireg", "unsigned",
    "use", "uwire", "vectored", "wait", "wand", "weak0", "weak1", "while", "wire", "wor", "xnor",
    "xor",
];

fn is_verilog_identifier(name: &str) -> bool {
    if VERILOG_KEYWORDS.contains(&name) {
        return false;
    }
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
