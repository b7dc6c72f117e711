use emulator::region::Chunk;
use emulator::registers::Reg;
use emulator::vm::Vm;

fn main() -> Result<(), emulator::Error> {
  // add v0, v1; add v0, v2; add v0, v3; halt
  let chunk: Chunk = vec![0x80, 0x14, 0x80, 0x24, 0x80, 0x34, 0x00, 0x00].into();
  let mut vm = Vm::new();
  vm.load(&chunk)?;
  vm.set_register(Reg::from_nibble(0), 5);
  for i in 1..=3 {
    vm.set_register(Reg::from_nibble(i), 10);
  }
  dbg!(vm.run())?;
  dbg!(vm.registers());

  // call 0x100 twice, where 0x100 adds v1 to v0 twice
  let mut vm = Vm::new();
  vm.load(&Chunk::from(vec![0x21, 0x00, 0x21, 0x00, 0x00, 0x00]))?;
  vm.load(&Chunk::at(0x100, &[0x80, 0x14, 0x80, 0x14, 0x00, 0xEE]))?;
  vm.set_register(Reg::from_nibble(0), 5);
  vm.set_register(Reg::from_nibble(1), 16);
  dbg!(vm.run())?;
  dbg!(vm);
  Ok(())
}
