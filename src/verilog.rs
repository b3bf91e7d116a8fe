use crate::{conv::WORD_LEN, image::NOP, RomConfig, RomImage};
use std::io::Write;

/// Writes a `rom_memory` module with `image` embedded as its initial contents.
///
/// Every entry is filled with [`NOP`] first; the program words then
/// overwrite the low entries in order. Writes on the bus are acknowledged but
/// never change the contents.
pub fn write_module(
    image: &RomImage,
    config: &RomConfig,
    out: &mut impl Write,
) -> std::io::Result<()> {
    write!(
        out,
        "\
`timescale 1ns / 1ps

module rom_memory #(
    parameter SIZE_BYTES = {capacity},
    parameter BASE_ADDR = 32'h{base:08x}
)(
    input clk,
    input rst_n,

    input         mem_valid,
    output        mem_ready,
    input  [31:0] mem_addr,
    input  [31:0] mem_wdata,
    input  [3:0]  mem_wstrb,
    output [31:0] mem_rdata
);

    localparam SIZE_WORDS = SIZE_BYTES / 4;
    localparam ADDR_BITS = $clog2(SIZE_WORDS);

    // ROM storage
    reg [31:0] rom_data [0:SIZE_WORDS-1];

    // Address calculation
    wire [ADDR_BITS-1:0] word_addr = (mem_addr - BASE_ADDR) >> 2;

    // ROM is always ready for reads, ignores writes
    assign mem_ready = mem_valid;

    // Read data
    assign mem_rdata = mem_valid ? rom_data[word_addr] : 32'h0;

    // Initialize ROM with embedded program
    integer i;
    initial begin
        // Initialize all locations to NOP (addi x0, x0, 0)
        for (i = 0; i < SIZE_WORDS; i = i + 1) begin
            rom_data[i] = 32'h{NOP:08x}; // NOP instruction
        end

        // Load compiled program
",
        capacity = config.capacity,
        base = config.base_address,
    )?;

    for (index, word) in image.words().iter().enumerate() {
        // Wide enough that a large ROM cannot wrap the annotation.
        let address = u64::from(config.base_address) + (index * WORD_LEN) as u64;
        writeln!(
            out,
            "        rom_data[{index:4}] = 32'h{word:08x};  // 0x{address:08x}"
        )?;
    }

    writeln!(out, "    end")?;
    writeln!(out)?;
    writeln!(out, "endmodule")
}
