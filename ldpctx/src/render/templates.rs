//! Transmit chain scaffolding modules
//!
//! Clock division, enable gating, ADC sampling, the serial shift-register
//! transmitter and the top level that wires them to the encoder.

/// Enable control: divides `clk` by `div_freq` into the sample clock and
/// gates the transmitter enable until the current frame is out
pub fn enable_control_unit(div_freq: u32) -> String {
    format!(
        r#"//// Control Unit for Enable
module Enable_Control_Unit(clk, tx_complete, enable, out_clk);

    parameter div_freq = {div_freq}; // Freq = clk/div_freq (According to the sampling frequency)

    input clk, tx_complete;

    output reg out_clk;
    output wire enable;

    reg [31:0] count; // Count register

    reg temp_reg;

    initial
    begin
        out_clk <= 0;
        count <= 0;
        temp_reg <= 1;
    end

    always @ (posedge clk)
    begin
        if (count == div_freq)
        begin
            count <= 0;
            out_clk <= ~out_clk;
        end

        else
        begin
            count <= count + 1;
        end
    end

    always @(posedge clk)
    begin
        if (count == 0)
        begin
            temp_reg <= 1;
        end

        if (tx_complete == 1 && count>0)
        begin
            temp_reg <= 0;
        end
    end

    assign enable = temp_reg & out_clk;

endmodule
"#
    )
}

/// Free-running clock divider toggling every `div_freq + 1` cycles
pub fn clock_divider(div_freq: u32) -> String {
    format!(
        r#"//// Clock Divider
module div_clk(clk, out);

    parameter div_freq = {div_freq}; // Div_clk = clk/div_freq

    input clk;
    output reg out;
    reg [31:0] count;

    initial
    begin
        out <= 0;
        count <= 0;
    end

    always @ (posedge clk)
    begin
        if (count == div_freq)
        begin
            out <= ~out;
            count <= 0; // Reset the counter
        end

        else
        begin
            count <= count + 1;
        end
    end
endmodule
"#
    )
}

/// MSB index of the transmitter bit counter for an `n`-bit codeword
pub fn counter_msb(n: usize) -> u32 {
    (n + 8).ilog2()
}

/// Serial transmitter shifting out the sync word followed by `n` codeword
/// bits, MSB first
pub fn serial_transmitter(n: usize, sync_word: u8) -> String {
    let top = n + 7;
    let below_top = n + 6;
    let frame_bits = n + 8;
    let counter = counter_msb(n);
    format!(
        r#"//// Creating a transmission module
module tx(clk, enable, transmit_bits, tx_complete, out);

    input clk;  //clock frequency
    input enable;   //transmitter enable
    input [{last}:0]transmit_bits;   // Encoded codeword

    output reg tx_complete; // When tx_complete = 1 denote completion of frame transmission.
    output reg out;
    reg tx_state;   //State of transmitter FSM

    parameter tx_idle = 1'b0;
    parameter tx_tx = 1'b1;

    wire [7:0]sync_bits;  //Frame Synchronization bits
    reg [{top}:0]tx_sr; //shift register for transmitting
    reg [{counter}:0]count;  //For keeping count of how many bits have been sent

    assign sync_bits[7:0] = 8'b{sync_word:08b};  //Value of Sync bits

    initial
    begin
        tx_state <= tx_idle;
        count <= 0;
    end

    always @(posedge clk)
    begin
        if (enable & (~tx_state))   //Transmission enabled but Transmitter still in idle state
        begin
            tx_sr <= {{sync_bits, transmit_bits}};   //Put values in Shift register for transmitting
            tx_state <= tx_tx;          //Change the state of transmitter FSM
            count <= 0;                //0 number of bits sent from current frame till now
            tx_complete <= 0;          // Set the tx_complete state to 0
        end

        if (tx_state==tx_tx)   //Transmitter is transmitting
        begin
            out <= tx_sr[{top}];     //Most significant bit goes out first
            tx_sr[{top}:1] <= tx_sr[{below_top}:0];
            tx_sr[0] <= 1'b0;
            count <= count+1;              //How many bits from shift register have been sent
        end

        if (count == {frame_bits})        //Sync word and codeword transmitted
        begin
            tx_state <= tx_idle;    //Transmission complete hence FSM goes to idle state
            tx_complete <= 1;
        end

        if (tx_state == tx_idle)
        begin
            out <= 1'b0;
        end
    end
endmodule
"#,
        last = n - 1,
    )
}

/// XADC wrapper keeping the top `width` bits of each 16-bit conversion
pub fn adc_sampler(width: u32) -> String {
    let msb = width - 1;
    let low = 16 - width;
    format!(
        r#"//Module for getting data from ADC
module get_adc_data(clk, v_n, v_p, data_out);
    input clk, v_n, v_p;
    output [{msb}:0] data_out;
    reg [31:0] counter;

    wire [6:0] daddr_in = 7'h16;
    wire adc_ready, isbusy, adc_data_ready, eos_out, alarm;
    wire [15:0] adc_data;
    wire [4:0] channel_out;
    audio_adc XADC_INST (
        .daddr_in(7'h03),   // specifies vcaux6 pins to digitize
        .dclk_in(clk),    // 50MHz clock
        .den_in(adc_ready), // tied to adc_ready for continuous conversions
        .di_in(16'h0),      // not used
        .dwe_in(1'b0),      // no writes to di_in
        .reset_in(1'b0),   // ADC reset
        .busy_out(isbusy),  // ADC is busy converting
        .channel_out(channel_out[4:0]), // selected channel, not used
        .do_out(adc_data),      // adc value from conversion
        .drdy_out(adc_data_ready),  // valid data is ready to be latched
        .eoc_out(adc_ready),   // conversion complete
        .eos_out(eos_out),     // conversion sequence complete
        .alarm_out(alarm),      // OR of all internal alarms, not used
        .vp_in(v_p),           // dedicated differential analog input
        .vn_in(v_n)            // dedicated differential analog input
    );

    reg [15:0] ready_adc_data;
    always @ (posedge adc_data_ready)
    begin
        ready_adc_data <= adc_data;
    end

    assign data_out = ready_adc_data[15:{low}];
endmodule
"#
    )
}

/// Encoder input assignment from an ADC sample of `adc_width` bits
fn encoder_input_assignment(k: usize, adc_width: usize) -> String {
    use std::cmp::Ordering;

    match k.cmp(&adc_width) {
        Ordering::Greater => format!(
            "        encoder_input[{}:0] <= adc_data;\n        encoder_input[{}:{}] <= {}'b{};\n",
            adc_width - 1,
            k - 1,
            adc_width,
            k - adc_width,
            "0".repeat(k - adc_width)
        ),
        Ordering::Equal => "        encoder_input <= adc_data;\n".to_string(),
        Ordering::Less => format!("        encoder_input <= adc_data[{}:0];\n", k - 1),
    }
}

/// Top level: ECU, ADC, encoder and transmitter
pub fn top_level(k: usize, n: usize, adc_width: u32, encoder_module: &str) -> String {
    let assignment = encoder_input_assignment(k, adc_width as usize);
    format!(
        r#"module transmitter(main_clk, v_p, v_n, tx_out);
    input main_clk;
    input v_p, v_n;
    output tx_out;

    // Tx signal clock generator
    wire tx_clk;
    assign tx_clk = main_clk;
//    div_clk DC(main_clk, tx_clk);

    // Enable Control Unit
    wire adc_clk; // Clock at which the samples are updated
    wire tx_enable; // Enable bit for the tx
    wire tx_complete;      //Signal to determine transmission of frame completed
    Enable_Control_Unit ECU(main_clk, tx_complete, tx_enable, adc_clk);


    // Get data from the ADC
    wire [{adc_msb}:0] adc_data; //sampled audio output from ADC
    get_adc_data ADC(main_clk, v_n, v_p, adc_data);    //ADC data acquire module

    // Encoding the received frame
    reg [{k_msb}:0] encoder_input; //Input to LDPC encoder

    always @(posedge adc_clk)
    begin
{assignment}    end

    wire [{n_msb}:0] encoded_data;    //Data after being encoded
    {encoder_module} E(encoder_input, encoded_data);  //LDPC encoder module

    // Transmitting the Encoded Frame
    tx T(main_clk, tx_enable, encoded_data, tx_complete, tx_out);    //Transmitter module

endmodule
"#,
        adc_msb = adc_width - 1,
        k_msb = k - 1,
        n_msb = n - 1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_width_matches_frame_length() {
        // 24-bit codeword: 32 bits on air, counter must reach 32
        assert_eq!(counter_msb(24), 5);
        assert_eq!(counter_msb(4), 3);
        assert_eq!(counter_msb(8), 4);
    }

    #[test]
    fn test_transmitter_parameters() {
        let src = serial_transmitter(24, 0b1010_1010);
        assert!(src.contains("input [23:0]transmit_bits;"));
        assert!(src.contains("reg [31:0]tx_sr;"));
        assert!(src.contains("reg [5:0]count;"));
        assert!(src.contains("assign sync_bits[7:0] = 8'b10101010;"));
        assert!(src.contains("tx_sr <= {sync_bits, transmit_bits};"));
        assert!(src.contains("tx_sr[31:1] <= tx_sr[30:0];"));
        assert!(src.contains("if (count == 32)"));
    }

    #[test]
    fn test_dividers_take_parameters() {
        assert!(enable_control_unit(2500).contains("parameter div_freq = 2500;"));
        assert!(clock_divider(0).contains("parameter div_freq = 0;"));
    }

    #[test]
    fn test_adc_width_selects_top_bits() {
        let src = adc_sampler(12);
        assert!(src.contains("output [11:0] data_out;"));
        assert!(src.contains("assign data_out = ready_adc_data[15:4];"));
        assert!(adc_sampler(16).contains("ready_adc_data[15:0];"));
    }

    #[test]
    fn test_top_level_pads_encoder_input() {
        let src = top_level(16, 24, 12, "encoder");
        assert!(src.contains("reg [15:0] encoder_input;"));
        assert!(src.contains("encoder_input[11:0] <= adc_data;"));
        assert!(src.contains("encoder_input[15:12] <= 4'b0000;"));
        assert!(src.contains("wire [23:0] encoded_data;"));
        assert!(src.contains("encoder E(encoder_input, encoded_data);"));

        assert!(top_level(12, 20, 12, "encoder").contains("encoder_input <= adc_data;\n"));
        assert!(top_level(2, 4, 12, "enc").contains("encoder_input <= adc_data[1:0];\n"));
    }
}
