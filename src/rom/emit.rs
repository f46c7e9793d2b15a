use std::io::Write;

use crate::{
    config::RomConfig,
    foundation::{
        core::{FrameRgb, RomGeometry},
        error::ImgRomResult,
    },
    rom::linear::{linearize, validate_sequence},
};

const INDENT: &str = "    ";

/// Write the complete Verilog ROM for `frames` to `out`.
///
/// The artifact contains, in order:
/// 1. the port list (`clk`, `addr`, `frame` when `F > 1`, registered `data`),
/// 2. a `ram_style = "block"` hint on the memory array,
/// 3. an `initial` block with one `rom[addr] = 24'hRRGGBB;` per cell, ascending,
/// 4. the synchronous read `always @(posedge clk)`.
///
/// Returns the number of initialization statements written (`W * H * F`).
pub fn emit_rom<W: Write>(
    out: &mut W,
    cfg: &RomConfig,
    frames: &[FrameRgb],
) -> ImgRomResult<u64> {
    let geom = cfg.validate()?;
    validate_sequence(geom, frames)?;
    write_validated(out, &cfg.module_name, geom, frames)
}

/// Body of [`emit_rom`] for a config and sequence that were already checked.
#[tracing::instrument(skip_all, fields(module = %module_name, frames = frames.len()))]
pub(crate) fn write_validated<W: Write>(
    out: &mut W,
    module_name: &str,
    geom: RomGeometry,
    frames: &[FrameRgb],
) -> ImgRomResult<u64> {
    write_header(out, module_name, geom)?;

    writeln!(out, "{INDENT}initial begin")?;
    let frame_pixels = geom.frame_pixels();
    let mut entries = 0u64;
    for (addr, px) in linearize(geom, frames) {
        writeln!(out, "{INDENT}{INDENT}rom[{addr}] = 24'h{:06X};", px.pack())?;
        entries += 1;
        if entries % frame_pixels == 0 {
            tracing::debug!(
                frame = entries / frame_pixels,
                of = geom.frames,
                "wrote frame"
            );
        }
    }
    writeln!(out, "{INDENT}end")?;

    write_read_port(out, geom)?;
    Ok(entries)
}

fn write_header<W: Write>(out: &mut W, module_name: &str, geom: RomGeometry) -> ImgRomResult<()> {
    let addr_bits = geom.addr_bits();

    writeln!(out, "module {module_name} (")?;
    writeln!(out, "{INDENT}input wire clk,")?;
    writeln!(out, "{INDENT}input wire [{}:0] addr,", addr_bits - 1)?;
    if let Some(frame_bits) = geom.frame_bits() {
        writeln!(out, "{INDENT}input wire [{}:0] frame,", frame_bits - 1)?;
    }
    writeln!(out, "{INDENT}output reg [23:0] data")?;
    writeln!(out, ");")?;

    if geom.is_multi_frame() {
        writeln!(
            out,
            "{INDENT}// Video: {} frames, {}x{} each",
            geom.frames, geom.width, geom.height
        )?;
        writeln!(out, "{INDENT}localparam FRAME_PIXELS = {};", geom.frame_pixels())?;
    } else {
        writeln!(out, "{INDENT}// Image size: {}x{}", geom.width, geom.height)?;
    }

    writeln!(out, "{INDENT}(* ram_style = \"block\" *)")?;
    writeln!(out, "{INDENT}reg [23:0] rom [0:{}];", geom.last_address())?;

    if geom.is_multi_frame() {
        // Same stride as linear::address.
        writeln!(
            out,
            "{INDENT}wire [{}:0] rom_addr = frame * FRAME_PIXELS + addr;",
            addr_bits - 1
        )?;
    }
    Ok(())
}

fn write_read_port<W: Write>(out: &mut W, geom: RomGeometry) -> ImgRomResult<()> {
    let index = if geom.is_multi_frame() {
        "rom_addr"
    } else {
        "addr"
    };
    writeln!(out, "{INDENT}always @(posedge clk) begin")?;
    writeln!(out, "{INDENT}{INDENT}data <= rom[{index}];")?;
    writeln!(out, "{INDENT}end")?;
    writeln!(out, "endmodule")?;
    Ok(())
}

/// Render the ROM into an in-memory string.
pub fn render_rom_string(cfg: &RomConfig, frames: &[FrameRgb]) -> ImgRomResult<String> {
    let mut buf = Vec::new();
    emit_rom(&mut buf, cfg, frames)?;
    // Everything written above is ASCII.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
#[path = "../../tests/unit/rom/emit.rs"]
mod tests;
