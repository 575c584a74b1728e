use ls8_core::isa::opcodes::*;

/// Assembles an LS-8 program one instruction at a time.
#[derive(Clone, Debug, Default)]
pub struct ProgramBuilder {
    bytes: Vec<u8>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Address the next instruction will be placed at.
    pub fn here(&self) -> u8 {
        self.bytes.len() as u8
    }

    pub fn byte(mut self, b: u8) -> Self {
        self.bytes.push(b);
        self
    }

    /// Pads with zero bytes up to `addr`.
    pub fn org(mut self, addr: u8) -> Self {
        assert!(usize::from(addr) >= self.bytes.len(), "org moves backwards");
        self.bytes.resize(usize::from(addr), 0);
        self
    }

    fn op0(self, op: u8) -> Self {
        self.byte(op)
    }

    fn op1(self, op: u8, a: u8) -> Self {
        self.byte(op).byte(a)
    }

    fn op2(self, op: u8, a: u8, b: u8) -> Self {
        self.byte(op).byte(a).byte(b)
    }

    // --- Instructions ---

    pub fn ldi(self, r: u8, imm: u8) -> Self {
        self.op2(LDI, r, imm)
    }

    pub fn prn(self, r: u8) -> Self {
        self.op1(PRN, r)
    }

    pub fn hlt(self) -> Self {
        self.op0(HLT)
    }

    pub fn add(self, a: u8, b: u8) -> Self {
        self.op2(ADD, a, b)
    }

    pub fn mul(self, a: u8, b: u8) -> Self {
        self.op2(MUL, a, b)
    }

    pub fn div(self, a: u8, b: u8) -> Self {
        self.op2(DIV, a, b)
    }

    pub fn and(self, a: u8, b: u8) -> Self {
        self.op2(AND, a, b)
    }

    pub fn cmp(self, a: u8, b: u8) -> Self {
        self.op2(CMP, a, b)
    }

    pub fn inc(self, r: u8) -> Self {
        self.op1(INC, r)
    }

    pub fn dec(self, r: u8) -> Self {
        self.op1(DEC, r)
    }

    pub fn jmp(self, r: u8) -> Self {
        self.op1(JMP, r)
    }

    pub fn jeq(self, r: u8) -> Self {
        self.op1(JEQ, r)
    }

    pub fn jne(self, r: u8) -> Self {
        self.op1(JNE, r)
    }

    pub fn call(self, r: u8) -> Self {
        self.op1(CALL, r)
    }

    pub fn int(self, r: u8) -> Self {
        self.op1(INT, r)
    }

    pub fn iret(self) -> Self {
        self.op0(IRET)
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }

    /// Renders the program in the loader's text format, one `%08b` byte per line.
    pub fn to_source(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:08b}\n")).collect()
    }
}
