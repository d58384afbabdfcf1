use cozy_chess::{Color, Piece};
use utils::attacks::{king_attacks, knight_attacks, pawn_attacks};
use utils::{AttackTables, Bitboard, Move, Position};

#[inline(always)]
fn both(position: &Position, piece: Piece) -> Bitboard {
    position.pieces(Color::White, piece) | position.pieces(Color::Black, piece)
}

/// Returns true if the side to move comes out of the exchange on `mv.to`
/// at least `threshold` ahead. `values` are indexed by piece.
pub fn static_exchange(
    tables: &AttackTables,
    position: &Position,
    mv: Move,
    threshold: i32,
    values: &[i32; 6],
) -> bool {
    let from = mv.from;
    let to = mv.to;

    let Some((_, mover)) = position.piece_on(from) else {
        return false;
    };

    // En passant and castling are not exchanges
    let is_en_passant = mover == Piece::Pawn && position.en_passant() == Some(to);
    let is_castle = mover == Piece::King && (from.file() as i32 - to.file() as i32).abs() == 2;
    if is_en_passant || is_castle {
        return threshold <= 0;
    }

    let victim_value = position
        .piece_on(to)
        .map_or(0, |(_, piece)| values[piece as usize]);

    // What the opponent may still win back
    let mut gain = victim_value - threshold;
    if gain < 0 {
        return false;
    }

    gain = values[mover as usize] - gain;
    if gain <= 0 {
        return true;
    }

    let pawns = both(position, Piece::Pawn);
    let knights = both(position, Piece::Knight);
    let bishops = both(position, Piece::Bishop);
    let rooks = both(position, Piece::Rook);
    let queens = both(position, Piece::Queen);
    let kings = both(position, Piece::King);
    let diagonal = position.diagonal_sliders(Color::White) | position.diagonal_sliders(Color::Black);
    let orthogonal =
        position.orthogonal_sliders(Color::White) | position.orthogonal_sliders(Color::Black);

    let mut occupied = position.occupied();
    occupied.clear(from);
    occupied.clear(to);

    let mut attackers = (pawn_attacks(to, Color::White) & position.pieces(Color::Black, Piece::Pawn))
        | (pawn_attacks(to, Color::Black) & position.pieces(Color::White, Piece::Pawn))
        | (knight_attacks(to) & knights)
        | (tables.bishop_attacks(to, occupied) & diagonal)
        | (tables.rook_attacks(to, occupied) & orthogonal)
        | (king_attacks(to) & kings);

    let us = position.side_to_move();
    let mut turn = us;
    let mut winner = us;

    loop {
        turn = !turn;
        attackers &= occupied;

        let ours = attackers & position.colors(turn);
        if ours.is_empty() {
            break;
        }

        // Whoever can still recapture is ahead until shown otherwise
        winner = !winner;

        let attacker_value;
        if !(ours & pawns).is_empty() {
            attacker_value = values[Piece::Pawn as usize];
            occupied.clear((ours & pawns).lsb());
            attackers |= tables.bishop_attacks(to, occupied) & diagonal;
        } else if !(ours & knights).is_empty() {
            attacker_value = values[Piece::Knight as usize];
            occupied.clear((ours & knights).lsb());
        } else if !(ours & bishops).is_empty() {
            attacker_value = values[Piece::Bishop as usize];
            occupied.clear((ours & bishops).lsb());
            attackers |= tables.bishop_attacks(to, occupied) & diagonal;
        } else if !(ours & rooks).is_empty() {
            attacker_value = values[Piece::Rook as usize];
            occupied.clear((ours & rooks).lsb());
            attackers |= tables.rook_attacks(to, occupied) & orthogonal;
        } else if !(ours & queens).is_empty() {
            attacker_value = values[Piece::Queen as usize];
            occupied.clear((ours & queens).lsb());
            attackers |= (tables.rook_attacks(to, occupied) & orthogonal)
                | (tables.bishop_attacks(to, occupied) & diagonal);
        } else {
            // The king may only take if nothing defends the square
            return if (attackers & position.colors(!turn)).is_empty() {
                us == winner
            } else {
                us != winner
            };
        }

        gain = -gain + 1 + attacker_value;
        if gain <= 0 {
            break;
        }
    }

    us == winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchConfig;
    use cozy_chess::Board;

    fn see(fen: &str, mv: &str, threshold: i32) -> bool {
        let board: Board = fen.parse().unwrap();
        let position = Position::from_board(&board, |_, _, _| Default::default());
        let tables = AttackTables::build();
        let values = SearchConfig::default().see_values();
        let mv = Move::from_uci(&board, mv).unwrap();
        static_exchange(&tables, &position, mv, threshold, &values)
    }

    #[test]
    fn test_queen_takes_undefended_pawn() {
        assert!(see("4k3/8/8/3p4/8/8/3Q4/4K3 w - - 0 1", "d2d5", 0));
        assert!(!see("4k3/8/8/3p4/8/8/3Q4/4K3 w - - 0 1", "d2d5", 101));
    }

    #[test]
    fn test_pawn_takes_defended_queen() {
        let fen = "4k3/8/2p5/3q4/4P3/8/8/4K3 w - - 0 1";
        assert!(see(fen, "e4d5", 0));
        assert!(see(fen, "e4d5", 800));
        assert!(!see(fen, "e4d5", 900));
    }

    #[test]
    fn test_queen_takes_defended_pawn() {
        let fen = "4k3/8/2p5/3p4/8/8/3Q4/4K3 w - - 0 1";
        assert!(!see(fen, "d2d5", 0));
        assert!(see(fen, "d2d5", -1000));
    }

    #[test]
    fn test_en_passant_and_castling_shortcut() {
        let fen = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2";
        assert!(see(fen, "e5d6", 0));
        assert!(!see(fen, "e5d6", 1));

        let fen = "4k3/8/8/8/8/8/8/4K2R w K - 0 1";
        assert!(see(fen, "e1g1", 0));
        assert!(!see(fen, "e1g1", 50));
    }

    #[test]
    fn test_xray_battery() {
        assert!(see("3r2k1/8/8/3p4/8/8/3R4/3RK3 w - - 0 1", "d2d5", 0));
        assert!(!see("3r2k1/8/8/3p4/8/8/3R4/4K3 w - - 0 1", "d2d5", 0));
    }

    #[test]
    fn test_pawn_recapture_uncovers_bishop() {
        // cxd5 opens the a8 bishop behind the pawn
        assert!(!see("b3k3/8/2p5/3p4/5N2/8/8/3RK3 w - - 0 1", "f4d5", -150));
        assert!(see("4k3/8/2p5/3p4/5N2/8/8/3RK3 w - - 0 1", "f4d5", -150));
    }

    #[test]
    fn test_king_recapture_only_when_safe() {
        // Kxd5 is illegal while the second rook still covers the square
        assert!(see("8/8/4k3/3p4/8/8/3R4/3RK3 w - - 0 1", "d2d5", 0));
        assert!(!see("8/8/4k3/3p4/8/8/3R4/4K3 w - - 0 1", "d2d5", 0));
    }
}
