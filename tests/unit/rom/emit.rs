use super::*;
use crate::foundation::core::Rgb8;

fn tiny(frames: u32) -> RomConfig {
    RomConfig::video(frames).with_raster(2, 2)
}

#[test]
fn single_frame_artifact_is_exact() {
    let frame = FrameRgb::from_fn(2, 2, |x, y| Rgb8::new(x as u8 * 0xFF, y as u8 * 0x10, 0xAB));
    let text = render_rom_string(&tiny(1), &[frame]).unwrap();

    let expected = "\
module image_rom (
    input wire clk,
    input wire [1:0] addr,
    output reg [23:0] data
);
    // Image size: 2x2
    (* ram_style = \"block\" *)
    reg [23:0] rom [0:3];
    initial begin
        rom[0] = 24'h0000AB;
        rom[1] = 24'hFF00AB;
        rom[2] = 24'h0010AB;
        rom[3] = 24'hFF10AB;
    end
    always @(posedge clk) begin
        data <= rom[addr];
    end
endmodule
";
    assert_eq!(text, expected);
}

#[test]
fn multi_frame_artifact_declares_frame_select() {
    let frames: Vec<_> = (0..3u8)
        .map(|f| FrameRgb::filled(2, 2, Rgb8::new(f, f, f)))
        .collect();
    let text = render_rom_string(&tiny(3), &frames).unwrap();

    assert!(text.contains("    input wire [3:0] addr,\n"));
    assert!(text.contains("    input wire [1:0] frame,\n"));
    assert!(text.contains("    // Video: 3 frames, 2x2 each\n"));
    assert!(text.contains("    localparam FRAME_PIXELS = 4;\n"));
    assert!(text.contains("    reg [23:0] rom [0:11];\n"));
    assert!(text.contains("    wire [3:0] rom_addr = frame * FRAME_PIXELS + addr;\n"));
    assert!(text.contains("        data <= rom[rom_addr];\n"));
    assert!(text.contains("        rom[4] = 24'h010101;\n"));
    assert!(text.contains("        rom[11] = 24'h020202;\n"));
    assert!(!text.contains("rom[12]"));
}

#[test]
fn emit_returns_entry_count() {
    let frames = vec![FrameRgb::filled(2, 2, Rgb8::BLACK); 2];
    let mut buf = Vec::new();
    let n = emit_rom(&mut buf, &tiny(2), &frames).unwrap();
    assert_eq!(n, 8);
    let statements = String::from_utf8(buf)
        .unwrap()
        .lines()
        .filter(|l| l.trim_start().starts_with("rom["))
        .count();
    assert_eq!(statements, 8);
}

#[test]
fn emit_rejects_sequence_not_matching_config() {
    let frames = vec![FrameRgb::filled(2, 2, Rgb8::BLACK)];
    let err = render_rom_string(&tiny(2), &frames).unwrap_err();
    assert!(err.to_string().contains("frame count mismatch"));

    let frames = vec![FrameRgb::filled(3, 2, Rgb8::BLACK)];
    let err = render_rom_string(&tiny(1), &frames).unwrap_err();
    assert!(err.to_string().contains("size mismatch"));
}

#[test]
fn custom_module_name_is_used() {
    let frames = vec![FrameRgb::filled(2, 2, Rgb8::BLACK)];
    let text = render_rom_string(&tiny(1).with_module_name("splash_rom"), &frames).unwrap();
    assert!(text.starts_with("module splash_rom (\n"));
}
